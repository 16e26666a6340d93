use crate::error::ConfigError;
use crate::games::{QuizQuestion, duck_questions};
use crate::llm::gemini::DEFAULT_API_BASE;
use crate::persona::SidebarSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Prefer `GEMINI_API_KEY` / `GOOGLE_API_KEY` over storing the key here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub chat: ChatConfig,

    /// Starting values of the settings panel.
    #[serde(default)]
    pub sidebar: SidebarSettings,

    #[serde(default)]
    pub games: GamesConfig,
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            log_level: default_log_level(),
            chat: ChatConfig::default(),
            sidebar: SidebarSettings::default(),
            games: GamesConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Upper bound on one completion call.
    #[serde(default = "default_chat_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_chat_timeout_secs() -> u64 {
    60
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.into()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_chat_timeout_secs(),
            api_base: default_api_base(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Fixed seed for the guessing game's secret numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess_seed: Option<u64>,
    /// TOML file of `[[questions]]` replacing the built-in duck quiz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_file: Option<PathBuf>,
}

#[derive(Deserialize)]
struct QuizFile {
    questions: Vec<QuizQuestion>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "temperature {} is outside 0.0..=2.0",
                self.temperature
            )));
        }
        if self.chat.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "chat.timeout_secs must be greater than zero".into(),
            ));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::Validation(format!("unknown log_level \"{}\"", self.log_level))
        })
    }

    /// Questions for the quiz: the configured file, or the built-in duck quiz.
    pub fn load_questions(&self) -> Result<Vec<QuizQuestion>, ConfigError> {
        let Some(path) = &self.games.quiz_file else {
            return duck_questions().map_err(|e| ConfigError::Validation(e.to_string()));
        };

        let quiz_error = |message: String| ConfigError::QuizFile {
            path: path.display().to_string(),
            message,
        };
        let contents = std::fs::read_to_string(path).map_err(|e| quiz_error(e.to_string()))?;
        let file: QuizFile = toml::from_str(&contents).map_err(|e| quiz_error(e.to_string()))?;
        if file.questions.is_empty() {
            return Err(quiz_error("no questions".into()));
        }

        tracing::info!(
            path = %path.display(),
            count = file.questions.len(),
            "Loaded quiz questions"
        );
        Ok(file.questions)
    }
}
