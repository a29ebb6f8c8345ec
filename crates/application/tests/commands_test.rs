use dnsrpc_application::commands::{build_registry, help::HELP_ENTRIES, CommandDependencies};
use dnsrpc_application::ports::ResultCachePort;
use dnsrpc_application::use_cases::HandleCommandQueryUseCase;
use dnsrpc_domain::config::DnsConfig;
use dnsrpc_domain::{ErrorKind, Query, RecordType, MAX_TXT_BYTES};
use std::net::IpAddr;
use std::sync::Arc;

mod helpers;
use helpers::{
    MockDictionary, MockExchangeRates, MockResultCache, MockTextGenerator, MockWeather, CLIENT_IP,
};

struct Fixture {
    use_case: HandleCommandQueryUseCase,
    generator: MockTextGenerator,
    cache: MockResultCache,
}

fn fixture_with(weather: MockWeather, generator: MockTextGenerator) -> Fixture {
    let cache = MockResultCache::new();
    let deps = CommandDependencies {
        text_generator: Arc::new(generator.clone()),
        exchange_rates: Arc::new(MockExchangeRates::new().with_rate("USD", "INR", 83.0)),
        weather: Arc::new(weather),
        dictionary: Arc::new(MockDictionary::new().with_definition(
            "fun",
            "noun",
            &"enjoyment ".repeat(40),
        )),
    };
    let dns = DnsConfig::default();
    let registry = build_registry(deps, &dns).unwrap();
    let use_case =
        HandleCommandQueryUseCase::new(Arc::new(registry), Arc::new(cache.clone()), dns.default_ttl);

    Fixture {
        use_case,
        generator,
        cache,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockWeather::new(), MockTextGenerator::new())
}

async fn ask(fixture: &Fixture, name: &str) -> Vec<String> {
    fixture
        .use_case
        .execute(&Query::new(name, RecordType::TXT, CLIENT_IP))
        .await
        .texts
}

#[test]
fn test_full_table_has_no_overlaps() {
    let deps = CommandDependencies {
        text_generator: Arc::new(MockTextGenerator::new()),
        exchange_rates: Arc::new(MockExchangeRates::new()),
        weather: Arc::new(MockWeather::new()),
        dictionary: Arc::new(MockDictionary::new()),
    };

    let registry = build_registry(deps, &DnsConfig::default()).unwrap();

    assert_eq!(registry.len(), 20);
    assert_eq!(registry.commands().filter(|c| c.cacheable).count(), 1);
}

#[tokio::test]
async fn test_rand_in_range() {
    let f = fixture();
    for _ in 0..20 {
        let texts = ask(&f, "2-100.rand").await;
        let n: i64 = texts[0].parse().unwrap();
        assert!((2..=100).contains(&n));
    }
}

#[tokio::test]
async fn test_rand_inverted_range_is_parse_error() {
    let f = fixture();
    let response = f
        .use_case
        .execute(&Query::new("9-1.rand", RecordType::TXT, CLIENT_IP))
        .await;
    assert_eq!(response.error, Some(ErrorKind::ParseError));
    assert_eq!(response.texts, vec!["Error: Invalid range format".to_string()]);
}

#[tokio::test]
async fn test_cidr_range() {
    let f = fixture();
    assert_eq!(
        ask(&f, "10.0.0.0/24.cidr").await,
        vec!["First: 10.0.0.1 Last: 10.0.0.254".to_string()]
    );
}

#[tokio::test]
async fn test_single_die() {
    let f = fixture();
    let texts = ask(&f, "1d6.dice").await;
    let text = &texts[0];
    let n: u32 = text
        .strip_prefix("Rolls: [")
        .and_then(|rest| rest.split(']').next())
        .unwrap()
        .parse()
        .unwrap();
    assert!((1..=6).contains(&n));
    assert_eq!(text, &format!("Rolls: [{}] Total: {}", n, n));
}

#[tokio::test]
async fn test_dice_modifier_overflow_is_parse_error() {
    let f = fixture();
    let response = f
        .use_case
        .execute(&Query::new(
            "1d6/9223372036854775807.dice",
            RecordType::TXT,
            CLIENT_IP,
        ))
        .await;
    assert_eq!(response.error, Some(ErrorKind::ParseError));
    assert_eq!(response.texts, vec!["Error: Invalid dice notation".to_string()]);
}

#[tokio::test]
async fn test_sudoku_solves() {
    let f = fixture();
    let texts = ask(
        &f,
        "530070000.600195000.098000060.800060003.400803001.700020006.060000280.000419005.000080079.sudoku",
    )
    .await;
    assert_eq!(
        texts[0],
        "534678912.672195348.198342567.859761423.426853791.713924856.961537284.287419635.345286179"
    );
}

#[tokio::test]
async fn test_sudoku_bad_shape() {
    let f = fixture();
    assert_eq!(
        ask(&f, "123.456.sudoku").await,
        vec!["Error: Invalid puzzle format".to_string()]
    );
}

#[tokio::test]
async fn test_help_lists_every_command_with_long_ttl() {
    let f = fixture();
    let response = f
        .use_case
        .execute(&Query::new("help", RecordType::TXT, CLIENT_IP))
        .await;
    assert_eq!(response.texts.len(), 19);
    assert_eq!(response.texts.len(), HELP_ENTRIES.len());
    assert_eq!(response.ttl, 86_400);
    assert!(response.texts[1].starts_with("get time for a city \"dig mumbai.time"));
}

#[tokio::test]
async fn test_aerial_ttl_and_format() {
    let f = fixture();
    let response = f
        .use_case
        .execute(&Query::new(
            "a12.9352,77.6245/12.9698,77.7500.aerial",
            RecordType::TXT,
            CLIENT_IP,
        ))
        .await;
    assert_eq!(response.ttl, 900);
    assert!(response.texts[0].starts_with("aerial distance = 14."));
    assert!(response.texts[0].ends_with(" KM"));
}

#[tokio::test]
async fn test_ip_echoes_client() {
    let f = fixture();
    assert_eq!(ask(&f, "ip").await, vec![CLIENT_IP.to_string()]);
}

#[tokio::test]
async fn test_pi_follows_question_type() {
    let f = fixture();
    let a = f
        .use_case
        .execute(&Query::new("pi", RecordType::A, CLIENT_IP))
        .await;
    assert_eq!(a.texts[0].parse::<IpAddr>().unwrap().to_string(), "3.14.15.92");

    let txt = ask(&f, "pi").await;
    assert!(txt[0].starts_with("3.14159"));
}

#[tokio::test]
async fn test_epoch_seconds() {
    let f = fixture();
    assert_eq!(
        ask(&f, "784783800.epoch").await,
        vec!["1994-11-14T03:30:00.000Z".to_string()]
    );
}

#[tokio::test]
async fn test_words() {
    let f = fixture();
    assert_eq!(
        ask(&f, "123456.words").await,
        vec!["one hundred and twenty three thousand four hundred and fifty six".to_string()]
    );
}

#[tokio::test]
async fn test_unit_conversion() {
    let f = fixture();
    assert_eq!(
        ask(&f, "42km-cm.unit").await,
        vec!["42km = 4200000.00cm".to_string()]
    );
    assert_eq!(
        ask(&f, "42km-parsec.unit").await,
        vec!["Error: Unsupported conversion: km to parsec".to_string()]
    );
}

#[tokio::test]
async fn test_base_conversion() {
    let f = fixture();
    assert_eq!(ask(&f, "100dec-hex.base").await, vec!["100dec = 64".to_string()]);
}

#[tokio::test]
async fn test_uuid_one_answer_each() {
    let f = fixture();
    let texts = ask(&f, "3.uuid").await;
    assert_eq!(texts.len(), 3);
    assert!(texts.iter().all(|t| t.len() == 36));
}

#[tokio::test]
async fn test_coin_count() {
    let f = fixture();
    let texts = ask(&f, "3.coin").await;
    let tosses: Vec<&str> = texts[0].split(", ").collect();
    assert_eq!(tosses.len(), 3);
    assert!(tosses.iter().all(|t| *t == "heads" || *t == "tails"));
}

#[tokio::test]
async fn test_forex_uses_rate() {
    let f = fixture();
    assert_eq!(
        ask(&f, "99usd-inr.fx").await,
        vec!["99 USD = 8217.00 INR".to_string()]
    );
    assert_eq!(
        ask(&f, "1usd-xyz.fx").await,
        vec!["Error: Could not convert USD to XYZ".to_string()]
    );
}

#[tokio::test]
async fn test_weather_four_answers() {
    let f = fixture();
    assert_eq!(
        ask(&f, "ahmedabad.weather").await,
        vec!["31C", "Sunny", "12km/h", "N/A"]
    );
}

#[tokio::test]
async fn test_weather_failure() {
    let f = fixture_with(MockWeather::failing(), MockTextGenerator::new());
    let response = f
        .use_case
        .execute(&Query::new("ahmedabad.weather", RecordType::TXT, CLIENT_IP))
        .await;
    assert_eq!(response.error, Some(ErrorKind::UpstreamError));
    assert_eq!(
        response.texts,
        vec!["Error: Could not fetch weather for ahmedabad".to_string()]
    );
}

#[tokio::test]
async fn test_dictionary_truncates_with_ellipsis() {
    let f = fixture();
    let texts = ask(&f, "fun.dict").await;
    assert_eq!(texts[0].len(), MAX_TXT_BYTES);
    assert!(texts[0].starts_with("[noun] enjoyment"));
    assert!(texts[0].ends_with("..."));

    assert_eq!(
        ask(&f, "no-such-word.dict").await,
        vec!["Error: No definition found for: no such word".to_string()]
    );
}

#[tokio::test]
async fn test_ai_is_cached_by_decoded_question() {
    let f = fixture();

    let first = ask(&f, "what-is-rust.ai").await;
    let second = ask(&f, "What-Is-Rust.ai.").await;

    assert_eq!(first, vec!["answer to what is rust".to_string()]);
    assert_eq!(first, second);
    assert_eq!(f.generator.calls(), 1);
    assert_eq!(f.generator.prompts(), vec!["what is rust".to_string()]);
    assert_eq!(f.cache.len(), 1);
}

#[tokio::test]
async fn test_ai_failure_is_not_cached() {
    let f = fixture_with(MockWeather::new(), MockTextGenerator::failing());

    let texts = ask(&f, "hello.ai").await;

    assert_eq!(texts, vec!["Error: Failed to generate AI response".to_string()]);
    assert!(f.cache.is_empty());
}

#[tokio::test]
async fn test_excuse_answers_one_line() {
    let f = fixture();
    let texts = ask(&f, "excuse").await;
    assert_eq!(texts.len(), 1);
    assert!(!texts[0].starts_with('#'));
}
