// src/domain/ticket_model.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 検索対象の列
const SEARCH_COLUMNS: [&str; 3] = ["id", "title", "description"];

/// `opportunities` テーブルの1行
///
/// 列の型は外部サービス側が決めるため、値はそのまま保持してクライアントへ返す。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(pub Map<String, Value>);

impl Ticket {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// id / title / description のいずれかに部分一致するか
    ///
    /// `needle` は小文字化済みであること。値は型に関係なく文字列化して比較する。
    pub fn matches_search(&self, needle: &str) -> bool {
        SEARCH_COLUMNS.iter().any(|column| {
            search_text(self.get(column))
                .to_lowercase()
                .contains(needle)
        })
    }
}

/// 部分更新で書き込む列（None の列は送らない）
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TicketChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl TicketChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.notes.is_none()
            && self.assigned_to.is_none()
    }
}

// 列なしは空文字、null は "None"、真偽値は "True"/"False"、文字列は引用符なし
fn search_text(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::Null) => "None".to_string(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
