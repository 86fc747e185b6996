pub const CONFIG_FILE: &str = "numkit.ini";
use ini::Ini;
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::level_filters::LevelFilter;
#[derive(Debug, Clone, PartialEq)]
pub struct ToolkitConfig {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub intervals: usize,
    pub eval_points: usize,
    pub fft_len: usize,
    pub log_level: LevelFilter,
}
lazy_static! {
    pub static ref TOOLKIT_CONFIG: ToolkitConfig = load_toolkit_config(CONFIG_FILE);
}
pub fn load_toolkit_config(path: &str) -> ToolkitConfig {
    let ini = match Ini::load_from_file(path) {
        Ok(ini) => ini,
        Err(_) => return ToolkitConfig::default(),
    };
    let default_section: HashMap<String, String> = ini
        .section(None::<String>)
        .map(|props| props.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
        .unwrap_or_default();
    from_section(&default_section)
}
fn from_section(section: &HashMap<String, String>) -> ToolkitConfig {
    let defaults = ToolkitConfig::default();
    ToolkitConfig {
        lower_bound: section
            .get("lower_bound")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.lower_bound),
        upper_bound: section
            .get("upper_bound")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.upper_bound),
        intervals: section
            .get("intervals")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.intervals),
        eval_points: section
            .get("eval_points")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.eval_points),
        fft_len: section
            .get("fft_len")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.fft_len),
        log_level: section
            .get("log_level")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.log_level),
    }
}
impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            lower_bound: -1.0,
            upper_bound: 1.0,
            intervals: 10,
            eval_points: 21,
            fft_len: 8,
            log_level: LevelFilter::INFO,
        }
    }
}
