use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    pub show_charts: bool,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// the conventional `data/` and `outputs/` directories next to the
    /// working directory.
    pub fn from_env() -> Self {
        let data_path = env::var("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data").join("taiwan_real_estate2.csv"));

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("outputs"));

        Self {
            data_path,
            output_dir,
            show_charts: true,
            chart_width: 1000,
            chart_height: 600,
        }
    }

    pub fn trend_chart_path(&self) -> PathBuf {
        self.output_dir.join("price_trends.png")
    }

    pub fn scatter_chart_path(&self) -> PathBuf {
        self.output_dir.join("price_vs_mrt.png")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data").join("taiwan_real_estate2.csv"),
            output_dir: PathBuf::from("outputs"),
            show_charts: true,
            chart_width: 1000,
            chart_height: 600,
        }
    }
}
