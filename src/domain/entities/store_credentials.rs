use secrecy::SecretString;
use url::Url;

use super::submission_context::CredentialNames;

/// Validated connection parameters for the waitlist store.
#[derive(Debug, Clone)]
pub struct StoreCredentials {
    pub url: Url,
    pub anon_key: SecretString,
}

impl StoreCredentials {
    /// Resolves both credentials through `lookup`, taking the first name in each
    /// list with a non-blank value. Returns `None` if either is missing or the
    /// URL is not an absolute http(s) address with a host.
    pub fn resolve<F>(lookup: F, names: &CredentialNames) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = first_present(&lookup, names.url)?;
        let url = Url::parse(&url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())?;
        let anon_key = first_present(&lookup, names.anon_key)?;

        Some(Self {
            url,
            anon_key: SecretString::new(anon_key.into()),
        })
    }
}

fn first_present<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(*name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
