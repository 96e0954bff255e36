pub mod app_config;
pub mod config;
pub mod error;
pub mod intake;
pub mod questionnaire;
pub mod responses;
pub mod sample;
pub mod window;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, IntakeError};
pub use intake::{SampleForm, SessionContext};
pub use responses::{load_responses, ResponsesFile};
pub use sample::{Country, MediaCategory, Sample, TranscriptAvailability};
pub use window::CollectionWindow;
