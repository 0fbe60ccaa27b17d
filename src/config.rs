use std::env;

use chrono_tz::Tz;

use crate::canvas::CanvasConfig;
use crate::error::AppError;
use crate::jex::JexConfig;

pub const DEFAULT_BLUEPRINT_COURSE_ID: &str = "TEMPLATE-ENHANCEDCOURSE";
pub const DEFAULT_CANVAS_ACCOUNT_ID: &str = "self";

/// How generated rows are written, independent of where data comes from.
#[derive(Clone, Debug)]
pub struct OutputSettings {
    /// Zone used to read zone-less dates and to write canonical ones.
    pub time_zone: Tz,
    pub blueprint_course_id: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            time_zone: Tz::UTC,
            blueprint_course_id: DEFAULT_BLUEPRINT_COURSE_ID.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub jex: JexConfig,
    pub canvas: CanvasConfig,
    pub output: OutputSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| {
            get(key).ok_or_else(|| AppError::Config(format!("{} is not set", key)))
        };

        let jex = JexConfig {
            base_url: require("JEX_BASE_URL")?.trim_end_matches('/').to_string(),
            api_token: require("JEX_TOKEN")?,
        };

        let canvas = CanvasConfig {
            base_url: require("CANVAS_BASE_URL")?.trim_end_matches('/').to_string(),
            api_token: require("CANVAS_TOKEN")?,
            account_id: get("CANVAS_ACCOUNT_ID")
                .unwrap_or_else(|| DEFAULT_CANVAS_ACCOUNT_ID.to_string()),
        };

        let time_zone = match get("SIS_TIME_ZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| AppError::Config(format!("SIS_TIME_ZONE {:?}: {}", name, e)))?,
            None => Tz::UTC,
        };

        let blueprint_course_id = get("CANVAS_BLUEPRINT_COURSE_ID")
            .unwrap_or_else(|| DEFAULT_BLUEPRINT_COURSE_ID.to_string());

        Ok(Self {
            jex,
            canvas,
            output: OutputSettings {
                time_zone,
                blueprint_course_id,
            },
        })
    }
}
