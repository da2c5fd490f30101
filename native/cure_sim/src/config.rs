//! Path: native/cure_sim/src/config.rs
//! Summary: ヘッドレスランナーの設定（RON ファイル + CLI 上書き）

use cure_core::constants::{DEFAULT_RNG_SEED, TICK_MS};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RunnerConfig {
    pub seed:          u64,
    pub tick_ms:       u64,
    /// 0 = ゲームオーバーまで
    pub max_ticks:     u64,
    pub skip_intro:    bool,
    /// この tick ごとに HUD をログ出力（0 で無効）
    pub log_hud_every: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_RNG_SEED,
            tick_ms: TICK_MS,
            max_ticks: 60 * 60 * 5,
            skip_intro: false,
            log_hud_every: 600,
        }
    }
}

impl RunnerConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        Self::from_ron(&data)
    }

    pub fn from_ron(data: &str) -> Result<Self, String> {
        let cfg: Self = ron::from_str(data).map_err(|e| format!("parse RON: {e}"))?;
        if cfg.tick_ms == 0 {
            return Err("tick_ms must be > 0".to_string());
        }
        Ok(cfg)
    }
}
