/// Execution context of a waitlist submission. Each context reads store
/// credentials from the variables it is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionContext {
    /// The landing page form. Only publicly exposable variables.
    Public,
    /// The JSON endpoint. Also sees the server-only URL variable.
    Server,
}

/// Variable names for each credential, in priority order.
#[derive(Debug)]
pub struct CredentialNames {
    pub url: &'static [&'static str],
    pub anon_key: &'static [&'static str],
}

pub const PRIMARY_URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const PRIMARY_KEY_VAR: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";
pub const FALLBACK_KEY_VAR: &str = "NEXT_PUBLIC_POSTGRES_URL_SUPABASE_SUPABASE_ANON_KEY";
pub const PUBLIC_FALLBACK_URL_VAR: &str = "NEXT_PUBLIC_POSTGRES_URL_SUPABASE_SUPABASE_URL";
pub const SERVER_FALLBACK_URL_VAR: &str = "POSTGRES_URL_SUPABASE_SUPABASE_URL";

static PUBLIC_NAMES: CredentialNames = CredentialNames {
    url: &[PRIMARY_URL_VAR, PUBLIC_FALLBACK_URL_VAR],
    anon_key: &[PRIMARY_KEY_VAR, FALLBACK_KEY_VAR],
};

static SERVER_NAMES: CredentialNames = CredentialNames {
    url: &[PRIMARY_URL_VAR, SERVER_FALLBACK_URL_VAR],
    anon_key: &[PRIMARY_KEY_VAR, FALLBACK_KEY_VAR],
};

impl SubmissionContext {
    pub fn credential_names(&self) -> &'static CredentialNames {
        match self {
            SubmissionContext::Public => &PUBLIC_NAMES,
            SubmissionContext::Server => &SERVER_NAMES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionContext::Public => "public",
            SubmissionContext::Server => "server",
        }
    }
}
