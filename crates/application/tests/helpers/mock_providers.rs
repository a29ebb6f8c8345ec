#![allow(dead_code)]

use async_trait::async_trait;
use dnsrpc_application::ports::{
    CommandHandler, Definition, DictionaryProvider, ExchangeRateProvider, ResultCachePort,
    TextGenerator, WeatherProvider, WeatherReport,
};
use dnsrpc_domain::{CommandRequest, DomainError};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

pub const CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 7));

// ============================================================================
// Result cache
// ============================================================================

#[derive(Clone, Default)]
pub struct MockResultCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MockResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }
}

impl ResultCachePort for MockResultCache {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: String) {
        self.entries.write().unwrap().insert(key.to_string(), value);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

// ============================================================================
// Text generator
// ============================================================================

#[derive(Clone, Default)]
pub struct MockTextGenerator {
    calls: Arc<AtomicUsize>,
    prompts: Arc<RwLock<Vec<String>>>,
    should_fail: bool,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.write().unwrap().push(prompt.to_string());
        if self.should_fail {
            return Err(DomainError::Upstream("backend unavailable".to_string()));
        }
        Ok(format!("answer to {}", prompt))
    }
}

// ============================================================================
// Exchange rates
// ============================================================================

#[derive(Clone, Default)]
pub struct MockExchangeRates {
    rates: Arc<RwLock<HashMap<(String, String), f64>>>,
}

impl MockExchangeRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(self, from: &str, to: &str, rate: f64) -> Self {
        self.rates
            .write()
            .unwrap()
            .insert((from.to_string(), to.to_string()), rate);
        self
    }
}

#[async_trait]
impl ExchangeRateProvider for MockExchangeRates {
    async fn rate(&self, from: &str, to: &str) -> Result<f64, DomainError> {
        self.rates
            .read()
            .unwrap()
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .ok_or_else(|| DomainError::Upstream("unknown pair".to_string()))
    }
}

// ============================================================================
// Weather
// ============================================================================

#[derive(Clone, Default)]
pub struct MockWeather {
    should_fail: bool,
}

impl MockWeather {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true }
    }
}

#[async_trait]
impl WeatherProvider for MockWeather {
    async fn current(&self, _city: &str) -> Result<WeatherReport, DomainError> {
        if self.should_fail {
            return Err(DomainError::UpstreamTimeout("wttr".to_string()));
        }
        Ok(WeatherReport {
            temperature: "31C".to_string(),
            condition: "Sunny".to_string(),
            wind: "12km/h".to_string(),
            precipitation: "N/A".to_string(),
        })
    }
}

// ============================================================================
// Dictionary
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDictionary {
    definitions: Arc<RwLock<HashMap<String, Definition>>>,
}

impl MockDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(self, word: &str, part_of_speech: &str, text: &str) -> Self {
        self.definitions.write().unwrap().insert(
            word.to_string(),
            Definition {
                part_of_speech: part_of_speech.to_string(),
                text: text.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl DictionaryProvider for MockDictionary {
    async fn define(&self, word: &str) -> Result<Definition, DomainError> {
        self.definitions
            .read()
            .unwrap()
            .get(word)
            .cloned()
            .ok_or_else(|| DomainError::Upstream("404".to_string()))
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Echoes its argument.
pub struct EchoHandler;

#[async_trait]
impl CommandHandler for EchoHandler {
    async fn execute(&self, request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        Ok(vec![request.argument.clone()])
    }
}

pub struct PanickingHandler;

#[async_trait]
impl CommandHandler for PanickingHandler {
    async fn execute(&self, _request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        panic!("handler blew up");
    }
}

pub struct EmptyHandler;

#[async_trait]
impl CommandHandler for EmptyHandler {
    async fn execute(&self, _request: &CommandRequest) -> Result<Vec<String>, DomainError> {
        Ok(Vec::new())
    }
}
