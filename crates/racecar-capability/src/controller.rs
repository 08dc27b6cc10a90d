use racecar_session::{Link, Result};
use racecar_transport::Datagram;
use racecar_wire::{Command, PayloadWriter};

/// Gamepad buttons, by wire index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    /// Left bumper.
    Lb = 4,
    /// Right bumper.
    Rb = 5,
    /// Left joystick press.
    Ljoy = 6,
    /// Right joystick press.
    Rjoy = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Trigger {
    Left = 0,
    Right = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Joystick {
    Left = 0,
    Right = 1,
}

/// Handle to the gamepad module.
pub struct Controller<'a, T> {
    link: &'a mut Link<T>,
}

impl<'a, T: Datagram> Controller<'a, T> {
    pub(crate) fn new(link: &'a mut Link<T>) -> Self {
        Self { link }
    }

    /// Whether `button` is held during this frame.
    pub fn is_down(&mut self, button: Button) -> Result<bool> {
        self.button_query(Command::ControllerIsDown, button)
    }

    /// Whether `button` went down during this frame.
    pub fn was_pressed(&mut self, button: Button) -> Result<bool> {
        self.button_query(Command::ControllerWasPressed, button)
    }

    /// Whether `button` went up during this frame.
    pub fn was_released(&mut self, button: Button) -> Result<bool> {
        self.button_query(Command::ControllerWasReleased, button)
    }

    /// Trigger position from 0.0 (released) to 1.0 (fully pressed).
    pub fn get_trigger(&mut self, trigger: Trigger) -> Result<f32> {
        let packet = self.indexed(Command::ControllerGetTrigger, trigger as u8);
        Ok(self.link.request(packet, 4)?.get_f32()?)
    }

    /// Joystick position as `(x, y)`, each from -1.0 to 1.0.
    pub fn get_joystick(&mut self, joystick: Joystick) -> Result<(f32, f32)> {
        let packet = self.indexed(Command::ControllerGetJoystick, joystick as u8);
        let mut response = self.link.request(packet, 8)?;
        Ok((response.get_f32()?, response.get_f32()?))
    }

    fn button_query(&mut self, command: Command, button: Button) -> Result<bool> {
        let packet = self.indexed(command, button as u8);
        Ok(self.link.request(packet, 1)?.get_bool()?)
    }

    fn indexed(&self, command: Command, index: u8) -> PayloadWriter {
        let mut packet = self.link.writer(command);
        packet.put_u8(index);
        packet
    }
}
