use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("MRQUACK_API_KEY")
            && !key.is_empty()
        {
            self.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("MRQUACK_MODEL")
            && !model.is_empty()
        {
            self.model = model;
        }

        if let Ok(temp_str) = std::env::var("MRQUACK_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.temperature = temp;
        }

        if let Ok(secs_str) = std::env::var("MRQUACK_TIMEOUT_SECS")
            && let Ok(secs) = secs_str.parse::<u64>()
            && secs > 0
        {
            self.chat.timeout_secs = secs;
        }

        if let Ok(level) = std::env::var("MRQUACK_LOG_LEVEL")
            && !level.is_empty()
        {
            self.log_level = level;
        }
    }
}
