pub mod config;
pub mod dir;
pub mod gui;
pub mod launcher;
pub mod logger;
pub mod otp;
pub mod register;
pub mod reset;
pub mod services;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

pub const VERSION: Version = Version { major: 0, minor: 1 };
