// src/domain/recording_model.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `recordings` テーブルの1行（列はそのまま保持する）
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recording(pub Map<String, Value>);

impl Recording {
    /// 外部サービスが採番した id（型は問わない）
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }
}

/// 挿入用のメタデータ行
#[derive(Clone, Debug, Serialize)]
pub struct NewRecording {
    pub filename: String,
    pub size: i64,
    pub mime_type: String,
    pub storage_path: String,
    pub ticket_id: Option<i64>,
}

/// ダウンロードURL解決用の射影
#[derive(Clone, Debug, Deserialize)]
pub struct RecordingLocation {
    pub storage_path: String,
}
