//! HTTP запросы к сервису словаря
//!
//! Оба вызова (чтение списка и создание слова) проходят через единую
//! политику разбора ответа `handle_response`.

use super::events::ApiEvent;
use super::model::{WordEntry, WordsResponse};
use serde_json::Value;
use tokio::sync::mpsc;

/// Адрес сервиса словаря
pub const API_BASE: &str = "https://dota-dictionary.herokuapp.com";

/// Ошибки при обращении к сервису
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Сетевая ошибка - запрос не ушёл или ответ не получен
    #[error("сетевая ошибка: {0}")]
    Transport(#[from] reqwest::Error),
    /// Тело ответа не разобралось как JSON ожидаемой формы
    #[error("некорректный ответ сервиса: {0}")]
    Decode(#[from] serde_json::Error),
    /// Сервис ответил неуспешным статусом; внутри - разобранное тело
    #[error("сервис отклонил запрос: {0}")]
    Rejected(Value),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Единая политика разбора ответа: тело парсится как JSON,
/// успешный статус возвращает тело, неуспешный - ошибку с телом
pub async fn handle_response(response: reqwest::Response) -> ApiResult<Value> {
    let ok = response.status().is_success();
    let body = response.text().await?;
    interpret_response(ok, &body)
}

/// Чистая часть политики разбора, без сети
pub fn interpret_response(ok: bool, body: &str) -> ApiResult<Value> {
    let json: Value = serde_json::from_str(body)?;
    if ok {
        Ok(json)
    } else {
        Err(ApiError::Rejected(json))
    }
}

/// Запросить полный список слов
pub async fn fetch_words(client: &reqwest::Client, base_url: &str) -> ApiResult<Vec<WordEntry>> {
    let response = client.get(format!("{}/api/words", base_url)).send().await?;
    let json = handle_response(response).await?;
    let parsed: WordsResponse = serde_json::from_value(json)?;
    Ok(parsed.words)
}

/// Создать новое слово. Значения уходят в query string как есть,
/// percent-encoding остаётся на транспорте
pub async fn create_word(
    client: &reqwest::Client,
    base_url: &str,
    title: &str,
    translate: &str,
) -> ApiResult<Value> {
    let response = client
        .post(format!("{}/api/words/add", base_url))
        .query(&[("title", title), ("translate", translate)])
        .send()
        .await?;
    handle_response(response).await
}

// === Задачи для запуска на рантайме GUI ===

/// Обновить список слов и отправить результат в GUI
pub async fn refresh_words(
    client: reqwest::Client,
    base_url: String,
    tx: mpsc::UnboundedSender<ApiEvent>,
) {
    match fetch_words(&client, &base_url).await {
        Ok(words) => {
            let _ = tx.send(ApiEvent::WordsLoaded(words));
        }
        Err(e) => {
            let _ = tx.send(ApiEvent::FetchFailed(e.to_string()));
        }
    }
}

/// Отправить новое слово и сообщить GUI об исходе
pub async fn submit_word(
    client: reqwest::Client,
    base_url: String,
    title: String,
    translate: String,
    tx: mpsc::UnboundedSender<ApiEvent>,
) {
    match create_word(&client, &base_url, &title, &translate).await {
        Ok(_) => {
            let _ = tx.send(ApiEvent::WordCreated(title));
        }
        Err(e) => {
            let _ = tx.send(ApiEvent::CreateFailed(title, e.to_string()));
        }
    }
}
