// support-backend/src/infrastructure/supabase/query.rs

use std::fmt::Display;

use reqwest::header::CONTENT_RANGE;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{error_from_response, SupabaseClient};
use crate::error::AppResult;
use crate::utils::error_helper::internal_server_error;

/// PostgREST 形式のテーブルクエリビルダー
///
/// `table("opportunities").eq("status", "open").fetch()` のように組み立て、
/// 最後の実行メソッドで1回だけリクエストを送る。
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl<'a> TableQuery<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    /// 完全一致フィルタ（`column=eq.value`）
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn order(mut self, column: &str, descending: bool) -> Self {
        let direction = if descending { "desc" } else { "asc" };
        self.order = Some(format!("{}.{}", column, direction));
        self
    }

    /// クエリパラメータ（select → filters → order の順）
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.columns.clone())];
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        params
    }

    /// 行を取得
    pub async fn fetch<T: DeserializeOwned>(self) -> AppResult<Vec<T>> {
        let request = self
            .client
            .http()
            .get(self.client.rest_url(&self.table))
            .query(&self.params());

        self.send_for_rows(request, "table_query::fetch").await
    }

    /// フィルタに一致する行を部分更新し、更新後の行を返す
    pub async fn update<B, T>(self, body: &B) -> AppResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // フィルタなしの PATCH はテーブル全体を書き換えるため拒否
        if self.filters.is_empty() {
            return Err(internal_server_error(
                format!("refusing unfiltered update on table {}", self.table),
                "table_query::update",
            ));
        }

        let request = self
            .client
            .http()
            .patch(self.client.rest_url(&self.table))
            .query(&self.params())
            .header("Prefer", "return=representation")
            .json(body);

        self.send_for_rows(request, "table_query::update").await
    }

    /// 行を挿入し、挿入後の行を返す
    pub async fn insert<B, T>(self, body: &B) -> AppResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .http()
            .post(self.client.rest_url(&self.table))
            .query(&[("select", self.columns.as_str())])
            .header("Prefer", "return=representation")
            .json(body);

        self.send_for_rows(request, "table_query::insert").await
    }

    /// 一致する行数（`Prefer: count=exact` の Content-Range から取得）
    pub async fn count(self) -> AppResult<Option<u64>> {
        let response = self
            .client
            .http()
            .head(self.client.rest_url(&self.table))
            .query(&self.params())
            .header("Prefer", "count=exact")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "table_query::count").await);
        }

        Ok(response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total))
    }

    async fn send_for_rows<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> AppResult<Vec<T>> {
        debug!(table = %self.table, params = ?self.params(), context = %context, "Sending table query");

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response, context).await);
        }

        let bytes = response.bytes().await?;
        // return=minimal 相当の空ボディは0件として扱う
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// "0-24/3573" や "*/3573" の合計件数部分
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit_once('/')?.1.trim().parse().ok()
}
