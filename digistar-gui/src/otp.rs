use std::fmt;
use std::time::Duration;

use iced::Subscription;

/// Seconds a user must wait before requesting another verification code
/// for the same address.
pub const OTP_RESEND_COOLDOWN: u64 = 300;

/// Countdown gating the "resend code" action.
///
/// Each flow owns its own timer so the registration and the password reset
/// cooldowns never interfere with each other.
#[derive(Debug, Clone, Default)]
pub struct OtpTimer {
    remaining: u64,
}

impl OtpTimer {
    pub fn start(&mut self) {
        self.remaining = OTP_RESEND_COOLDOWN;
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
    }

    /// Decrements the countdown by one second, saturating at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Emits one message per second while the countdown is running.
    pub fn subscription<M: 'static>(&self, on_tick: fn() -> M) -> Subscription<M> {
        if self.is_running() {
            iced::time::every(Duration::from_secs(1)).map(move |_| on_tick())
        } else {
            Subscription::none()
        }
    }
}

impl fmt::Display for OtpTimer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_down_without_underflow() {
        let mut timer = OtpTimer { remaining: 5 };
        for expected in [4, 3, 2, 1, 0] {
            timer.tick();
            assert_eq!(timer.remaining(), expected);
        }
        assert!(!timer.is_running());

        // Further ticks stay at zero.
        timer.tick();
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn start_arms_the_full_cooldown() {
        let mut timer = OtpTimer::default();
        assert!(!timer.is_running());
        timer.start();
        assert_eq!(timer.remaining(), OTP_RESEND_COOLDOWN);
        assert!(timer.is_running());
        timer.reset();
        assert!(!timer.is_running());
    }

    #[test]
    fn two_timers_are_independent() {
        let mut register = OtpTimer::default();
        let mut reset = OtpTimer::default();
        register.start();
        reset.start();

        register.tick();
        assert_eq!(register.remaining(), OTP_RESEND_COOLDOWN - 1);
        assert_eq!(reset.remaining(), OTP_RESEND_COOLDOWN);

        reset.reset();
        assert!(!reset.is_running());
        assert!(register.is_running());
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(OtpTimer { remaining: 300 }.to_string(), "5:00");
        assert_eq!(OtpTimer { remaining: 61 }.to_string(), "1:01");
        assert_eq!(OtpTimer { remaining: 9 }.to_string(), "0:09");
        assert_eq!(OtpTimer { remaining: 0 }.to_string(), "0:00");
    }
}
