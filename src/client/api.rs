//! Wallet API endpoints.
//!
//! Each method renders a path and body and hands a `RequestSpec` to the
//! executor with the retry budget of its operation family:
//!
//! | Family       | Operations                                        | Budget                 |
//! |--------------|---------------------------------------------------|------------------------|
//! | default      | authenticate, session, user info, end round       | `retries.default`      |
//! | transactions | debit, cancel debit, credit                       | `retries.transactions` |
//! | bets         | bet, result, cancel                               | `retries.bets`         |

use std::borrow::Cow;

use serde_json::{json, Map, Value};
use url::form_urlencoded;
use uuid::Uuid;

use crate::client::executor::RequestExecutor;
use crate::client::types::ClientResult;
use crate::config::ClientConfig;
use crate::http::request::HttpMethod;
use crate::http::transport::{ReqwestTransport, Transport};

/// Fields returned by `get_user_info` when none are requested.
pub const DEFAULT_USER_FIELDS: [&str; 9] = [
    "balance",
    "currency",
    "country",
    "username",
    "nickname",
    "firstName",
    "lastName",
    "birthday",
    "email",
];

/// Debit, cancel-debit or credit against a user's balance.
#[derive(Debug, Clone, Default)]
pub struct TransactionRequest {
    pub user_id: String,
    pub session_id: String,
    pub round_id: Option<String>,
    /// Generated when absent.
    pub transaction_id: Option<String>,
    /// Sent as the JSON body (amount, gameType, debitTransactionId, ...).
    pub details: Map<String, Value>,
}

/// Bet, result or cancel tied to a reference id.
#[derive(Debug, Clone, Default)]
pub struct BetRequest {
    pub user_id: String,
    pub session_id: String,
    pub reference_id: String,
    /// Generated when absent.
    pub transaction_id: Option<String>,
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Copy)]
enum TransactionType {
    Debit,
    CancelDebit,
    Credit,
    Bet,
    Result,
    Cancel,
}

impl TransactionType {
    fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "DEBIT",
            TransactionType::CancelDebit => "CANCEL_DEBIT",
            TransactionType::Credit => "CREDIT",
            TransactionType::Bet => "BET",
            TransactionType::Result => "RESULT",
            TransactionType::Cancel => "CANCEL",
        }
    }
}

fn query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Percent-encode one path segment.
fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

fn transaction_id(given: &Option<String>) -> String {
    given.clone().unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Typed client for the wallet API.
#[derive(Debug, Clone)]
pub struct OneWalletApi<T = ReqwestTransport> {
    config: ClientConfig,
    executor: RequestExecutor<T>,
}

impl OneWalletApi<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> OneWalletApi<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            executor: RequestExecutor::with_transport(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn executor(&self) -> &RequestExecutor<T> {
        &self.executor
    }

    async fn call(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<Value>,
        max_retries: u32,
    ) -> ClientResult<Value> {
        let mut spec = self.config.request(method, path, max_retries);
        spec.body = body;
        self.executor.execute(&spec).await
    }

    /// Check a player's credentials.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> ClientResult<Value> {
        let body = json!({ "username": username, "password": password });
        self.call(
            HttpMethod::Post,
            "/users/authenticate".to_string(),
            Some(body),
            self.config.retries.default,
        )
        .await
    }

    /// Open a game session for a player.
    pub async fn create_game_session(
        &self,
        user_id: &str,
        details: Map<String, Value>,
    ) -> ClientResult<Value> {
        self.call(
            HttpMethod::Post,
            format!("/users/{}/sessions", segment(user_id)),
            Some(Value::Object(details)),
            self.config.retries.default,
        )
        .await
    }

    /// Fetch player fields; `None` requests [`DEFAULT_USER_FIELDS`].
    pub async fn get_user_info(&self, user_id: &str, fields: Option<&[&str]>) -> ClientResult<Value> {
        let fields = fields.unwrap_or(&DEFAULT_USER_FIELDS[..]).join(",");
        self.call(
            HttpMethod::Get,
            format!("/users/{}?{}", segment(user_id), query(&[("fields", fields.as_str())])),
            None,
            self.config.retries.default,
        )
        .await
    }

    pub async fn debit(&self, request: TransactionRequest) -> ClientResult<Value> {
        self.transaction(TransactionType::Debit, request).await
    }

    pub async fn cancel_debit(&self, request: TransactionRequest) -> ClientResult<Value> {
        self.transaction(TransactionType::CancelDebit, request).await
    }

    pub async fn credit(&self, request: TransactionRequest) -> ClientResult<Value> {
        self.transaction(TransactionType::Credit, request).await
    }

    async fn transaction(&self, kind: TransactionType, request: TransactionRequest) -> ClientResult<Value> {
        let round = request
            .round_id
            .as_ref()
            .map(|id| format!("/rounds/{}", segment(id)))
            .unwrap_or_default();
        let path = format!(
            "/users/{}{}/transactions/{}?{}",
            segment(&request.user_id),
            round,
            segment(&transaction_id(&request.transaction_id)),
            query(&[("type", kind.as_str()), ("sessionId", request.session_id.as_str())]),
        );
        self.call(
            HttpMethod::Put,
            path,
            Some(Value::Object(request.details)),
            self.config.retries.transactions,
        )
        .await
    }

    /// Close a game round.
    pub async fn end_round(
        &self,
        user_id: &str,
        round_id: &str,
        session_id: &str,
        details: Map<String, Value>,
    ) -> ClientResult<Value> {
        self.call(
            HttpMethod::Post,
            format!(
                "/users/{}/rounds/{}/end?{}",
                segment(user_id),
                segment(round_id),
                query(&[("sessionId", session_id)])
            ),
            Some(Value::Object(details)),
            self.config.retries.default,
        )
        .await
    }

    pub async fn bet(&self, request: BetRequest) -> ClientResult<Value> {
        self.bet_transaction(TransactionType::Bet, request).await
    }

    pub async fn result(&self, request: BetRequest) -> ClientResult<Value> {
        self.bet_transaction(TransactionType::Result, request).await
    }

    pub async fn cancel(&self, request: BetRequest) -> ClientResult<Value> {
        self.bet_transaction(TransactionType::Cancel, request).await
    }

    async fn bet_transaction(&self, kind: TransactionType, request: BetRequest) -> ClientResult<Value> {
        let path = format!(
            "/users/{}/transactions/{}?{}",
            segment(&request.user_id),
            segment(&transaction_id(&request.transaction_id)),
            query(&[
                ("type", kind.as_str()),
                ("sessionId", request.session_id.as_str()),
                ("referenceId", request.reference_id.as_str()),
            ]),
        );
        self.call(
            HttpMethod::Put,
            path,
            Some(Value::Object(request.details)),
            self.config.retries.bets,
        )
        .await
    }
}
