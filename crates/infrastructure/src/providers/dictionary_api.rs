use super::http_client::{join_url, send_json};
use async_trait::async_trait;
use dnsrpc_application::ports::{Definition, DictionaryProvider};
use dnsrpc_domain::config::ProvidersConfig;
use dnsrpc_domain::DomainError;
use serde::Deserialize;

const SERVICE: &str = "dictionaryapi.dev";

#[derive(Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DefinitionText>,
}

#[derive(Deserialize)]
struct DefinitionText {
    definition: String,
}

fn first_definition(entries: Vec<Entry>) -> Option<Definition> {
    let meaning = entries.into_iter().next()?.meanings.into_iter().next()?;
    let text = meaning.definitions.into_iter().next()?.definition;
    Some(Definition {
        part_of_speech: meaning.part_of_speech,
        text,
    })
}

/// Free Dictionary API (`{base}/{word}`), English entries.
pub struct FreeDictionaryProvider {
    client: reqwest::Client,
    base_url: String,
}

impl FreeDictionaryProvider {
    pub fn new(client: reqwest::Client, config: &ProvidersConfig) -> Self {
        Self {
            client,
            base_url: config.dictionary_base_url.clone(),
        }
    }
}

#[async_trait]
impl DictionaryProvider for FreeDictionaryProvider {
    async fn define(&self, word: &str) -> Result<Definition, DomainError> {
        let url = join_url(&self.base_url, &[word])?;
        let entries: Vec<Entry> = send_json(SERVICE, self.client.get(url)).await?;
        first_definition(entries)
            .ok_or_else(|| DomainError::Upstream(format!("{} has no definition", SERVICE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_meaning_first_definition() {
        let body = r#"[{"word":"fun","meanings":[
            {"partOfSpeech":"noun","definitions":[{"definition":"Enjoyment, amusement."},{"definition":"Playful behaviour."}]},
            {"partOfSpeech":"verb","definitions":[{"definition":"To tease."}]}]}]"#;
        let entries: Vec<Entry> = serde_json::from_str(body).unwrap();
        assert_eq!(
            first_definition(entries),
            Some(Definition {
                part_of_speech: "noun".to_string(),
                text: "Enjoyment, amusement.".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(first_definition(Vec::new()), None);
    }
}
