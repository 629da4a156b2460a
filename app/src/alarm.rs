use chrono::NaiveTime;

pub fn parse_alarm_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| format!("Alarm time must be HH:MM, got '{}'", value.trim()))
}

/// One-shot wall-clock alarm. Arming a time in the past fires on the
/// very next poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    armed: Option<NaiveTime>,
    fired: bool,
}

impl Alarm {
    pub fn new() -> Self {
        Self {
            armed: None,
            fired: false,
        }
    }

    pub fn arm(&mut self, time: NaiveTime) {
        self.armed = Some(time);
        self.fired = false;
    }

    pub fn disarm(&mut self) {
        self.armed = None;
        self.fired = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some() && !self.fired
    }

    pub fn armed_time(&self) -> Option<NaiveTime> {
        self.armed
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// True exactly once, on the first poll at or past the armed time.
    pub fn check(&mut self, now: NaiveTime) -> bool {
        if self.fired {
            return false;
        }
        match self.armed {
            Some(time) if now >= time => {
                self.fired = true;
                true
            }
            _ => false,
        }
    }
}

impl Default for Alarm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_valid_time() {
        assert_eq!(parse_alarm_time("07:30"), Ok(time(7, 30)));
        assert_eq!(parse_alarm_time(" 23:59 "), Ok(time(23, 59)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_alarm_time("25:00").is_err());
        assert!(parse_alarm_time("7h30").is_err());
        assert!(parse_alarm_time("").is_err());
    }

    #[test]
    fn test_fires_at_the_armed_minute() {
        let mut alarm = Alarm::new();
        alarm.arm(time(7, 30));

        assert!(!alarm.check(time(7, 29)));
        assert!(alarm.check(time(7, 30)));
    }

    #[test]
    fn test_fires_only_once() {
        let mut alarm = Alarm::new();
        alarm.arm(time(7, 30));

        assert!(alarm.check(time(7, 31)));
        assert!(!alarm.check(time(7, 32)));
        assert!(alarm.has_fired());
        assert!(!alarm.is_armed());
    }

    #[test]
    fn test_past_time_fires_on_next_poll() {
        let mut alarm = Alarm::new();
        alarm.arm(time(6, 0));
        assert!(alarm.check(time(12, 0)));
    }

    #[test]
    fn test_disarm_stops_the_alarm() {
        let mut alarm = Alarm::new();
        alarm.arm(time(7, 30));
        alarm.disarm();

        assert!(!alarm.check(time(8, 0)));
        assert!(!alarm.is_armed());
    }

    #[test]
    fn test_rearm_fires_again() {
        let mut alarm = Alarm::new();
        alarm.arm(time(7, 0));
        assert!(alarm.check(time(7, 0)));

        alarm.arm(time(8, 0));
        assert!(alarm.is_armed());
        assert!(alarm.check(time(8, 0)));
    }

    #[test]
    fn test_unarmed_never_fires() {
        let mut alarm = Alarm::new();
        assert!(!alarm.check(time(12, 0)));
    }
}
