use uuid::Uuid;

use crate::{app_error::AppError, domain::entities::waitlist_outcome::WaitlistOutcome};

const BRAND_NAME: &str = "Zendit";
const DOCS_URL: &str = "https://zendit.gitbook.io/zendit";
const CONTACT_EMAIL: &str = "zendit.contact@gmail.com";
const TWITTER_URL: &str = "https://x.com/zenditpay";
const PAGE_TITLE: &str = "Zendit | Bridge the Last Mile from Crypto to Fiat";
const PAGE_DESCRIPTION: &str = "Zendit is the two-rail payment infrastructure built on Flare. Seamlessly bridge on-chain assets to off-chain bank accounts with real-time quoting and automated orchestration.";

/// Visual weight of the notification shown after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Info,
    Error,
}

impl NoticeTone {
    fn css_class(&self) -> &'static str {
        match self {
            NoticeTone::Success => "toast toast-success",
            NoticeTone::Info => "toast toast-info",
            NoticeTone::Error => "toast toast-error",
        }
    }
}

/// Dismissible message rendered at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub message: String,
}

impl From<&WaitlistOutcome> for Notice {
    fn from(outcome: &WaitlistOutcome) -> Self {
        let tone = match outcome {
            WaitlistOutcome::Joined => NoticeTone::Success,
            WaitlistOutcome::AlreadyRegistered => NoticeTone::Info,
            WaitlistOutcome::Failed(_) => NoticeTone::Error,
        };
        Self {
            tone,
            message: outcome.message(),
        }
    }
}

impl From<&AppError> for Notice {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::SubmissionInProgress => Self {
                tone: NoticeTone::Info,
                message: "Your request is already being processed.".to_string(),
            },
            AppError::InvalidInput(_) => Self {
                tone: NoticeTone::Error,
                message: "This form could not be submitted. Please try again.".to_string(),
            },
        }
    }
}

/// Everything the landing page needs besides its static content.
pub struct LandingPage<'a> {
    pub form_id: Uuid,
    /// Value to put back into the email field.
    pub email: &'a str,
    pub notice: Option<Notice>,
    pub year: i32,
}

impl<'a> LandingPage<'a> {
    pub fn fresh(year: i32) -> Self {
        Self {
            form_id: Uuid::new_v4(),
            email: "",
            notice: None,
            year,
        }
    }

    /// Page shown after a submission: a new form id, and the typed email kept
    /// unless the outcome clears it.
    pub fn after_submission(outcome: &WaitlistOutcome, typed_email: &'a str, year: i32) -> Self {
        let email = if outcome.clears_input() { "" } else { typed_email };
        Self::with_notice(Notice::from(outcome), email, year)
    }

    /// Page shown when a submission was refused before reaching the waitlist.
    pub fn after_rejection(error: &AppError, typed_email: &'a str, year: i32) -> Self {
        Self::with_notice(Notice::from(error), typed_email, year)
    }

    fn with_notice(notice: Notice, email: &'a str, year: i32) -> Self {
        Self {
            form_id: Uuid::new_v4(),
            email,
            notice: Some(notice),
            year,
        }
    }

    pub fn render(&self) -> String {
        let notice = self.notice.as_ref().map(render_notice).unwrap_or_default();
        let form = waitlist_form(self.form_id, self.email);
        let steps = process_steps();
        let features = feature_list();

        wrap_page(&format!(
            r#"{notice}
<nav class="nav"><div class="nav-inner">{logo}<div class="nav-links"><a href="{DOCS_URL}" target="_blank" rel="noopener">Documentation</a><a class="pill" href="mailto:{CONTACT_EMAIL}">Contact</a></div></div></nav>
<main>
  <section class="hero">
    <span class="badge">The Two-Rail Payment System</span>
    <h1>Bridge the Last Mile<br>from Crypto to Fiat.</h1>
    <p class="lead">{BRAND_NAME} enables seamless, real-time payouts from the Flare network directly to bank accounts. No wallet required for receivers. Pure efficiency for senders.</p>
    {form}
    <p class="fine">Join the future of orchestrated liquidity on Flare.</p>
  </section>
  <section class="flow">
    <h2>The Gateway to Two-Rail Payments</h2>
    <p class="muted">{BRAND_NAME} reduces technical friction by managing the entire lifecycle of a cross-rail payout in a single atomic flow.</p>
    <div class="steps">{steps}</div>
  </section>
  <section class="card">
    <div>
      <h2>Built for Modular Connectivity</h2>
      <ul class="features">{features}</ul>
    </div>
    <div class="panels">
      <div class="panel"><span class="dot"></span><span class="mono">State: Payout_Initiated</span><div class="bar"><div class="bar-fill"></div></div></div>
      <div class="panel"><span class="mono">QUOTE_ID: ZX-0912</span><span class="mono accent">1 FLR &asymp; 0.023 USD</span></div>
    </div>
  </section>
</main>
<footer>{logo}<p class="muted">&copy; {year} {BRAND_NAME}. Built on Flare.</p><a href="{TWITTER_URL}" target="_blank" rel="noopener">Twitter / X</a></footer>"#,
            logo = logo(),
            year = self.year,
        ))
    }
}

fn logo() -> String {
    format!(r#"<span class="logo">{BRAND_NAME}</span>"#)
}

fn render_notice(notice: &Notice) -> String {
    format!(
        r#"<div class="{class}" role="status"><span>{message}</span><button type="button" class="toast-close" aria-label="Dismiss" onclick="this.parentElement.remove()">&times;</button></div>"#,
        class = notice.tone.css_class(),
        message = escape_html(&notice.message),
    )
}

fn waitlist_form(form_id: Uuid, email: &str) -> String {
    format!(
        r#"<form class="waitlist" method="post" action="/" onsubmit="var b=this.querySelector('button');b.disabled=true;b.classList.add('loading');">
      <input type="hidden" name="form_id" value="{form_id}">
      <input type="email" name="email" placeholder="Enter your work email" required value="{email}">
      <button type="submit"><span class="label">Request Early Access</span><span class="spinner" aria-hidden="true"></span></button>
    </form>"#,
        email = escape_html(email),
    )
}

fn process_steps() -> String {
    [
        (
            "Step 01",
            "On-Chain Funding",
            "Send FLR or assets to the Zendit vault. Our smart contracts verify funding instantly via Flare state connectors.",
        ),
        (
            "Step 02",
            "Orchestration",
            "The Zendit engine locks in a guaranteed quote and moves the intent through the automated state machine.",
        ),
        (
            "Step 03",
            "Fiat Delivery",
            "Local payout adapters trigger a bank transfer. The receiver gets fiat directly, no crypto knowledge required.",
        ),
    ]
    .iter()
    .map(|(label, title, desc)| {
        format!(r#"<div class="step"><span class="step-label">{label}</span><h3>{title}</h3><p class="muted">{desc}</p></div>"#)
    })
    .collect()
}

fn feature_list() -> String {
    [
        "Standardized Payout Adapters for global reach",
        "Stateful transaction management across rails",
        "Atomic bridging with Flare smart accounts",
    ]
    .iter()
    .map(|feature| format!("<li>{feature}</li>"))
    .collect()
}

fn wrap_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<meta name="description" content="{PAGE_DESCRIPTION}">
<meta property="og:title" content="Zendit | The Last Mile of Crypto is Fiat">
<meta property="og:site_name" content="{BRAND_NAME}">
<meta name="twitter:site" content="@zenditpay">
<style>{STYLES}</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

const STYLES: &str = r#"
:root{--orange:#f97316;--red:#ef4444;--fg:#0a0a0a;--muted:#71717a;--line:#e4e4e7}
*{box-sizing:border-box}body{margin:0;font-family:system-ui,-apple-system,sans-serif;color:var(--fg);background:#fff}
a{color:inherit}.muted{color:var(--muted)}.mono{font-family:ui-monospace,monospace;font-size:12px;opacity:.6}.accent{color:var(--orange);opacity:1;font-weight:700}
.nav{position:fixed;top:0;left:0;right:0;display:flex;justify-content:center;padding:12px;z-index:10}
.nav-inner{display:flex;justify-content:space-between;align-items:center;width:100%;max-width:1200px;padding:8px 24px;border-radius:16px;background:rgba(255,255,255,.7);backdrop-filter:blur(8px)}
.nav-links{display:flex;gap:24px;align-items:center;font-size:14px}.pill{background:var(--fg);color:#fff;padding:8px 20px;border-radius:999px;text-decoration:none}
.logo{font-weight:800;font-size:22px;letter-spacing:-.03em}
main{display:flex;flex-direction:column;align-items:center;padding:128px 24px 80px}
.hero{max-width:900px;text-align:center}.hero h1{font-size:clamp(36px,7vw,72px);letter-spacing:-.04em;margin:0 0 32px}
.badge{display:inline-block;border:1px solid rgba(249,115,22,.2);color:var(--orange);border-radius:999px;padding:4px 12px;font-size:12px;font-weight:600;margin-bottom:24px}
.lead{font-size:20px;color:#52525b;line-height:1.6}.fine{font-size:12px;color:var(--muted)}
.waitlist{display:flex;gap:8px;max-width:440px;margin:40px auto 0;padding:8px;border:1px solid var(--line);border-radius:16px;box-shadow:0 20px 40px rgba(249,115,22,.1)}
.waitlist input[type=email]{flex:1;border:0;outline:0;padding:12px 16px;font-size:14px;background:transparent}
.waitlist button{min-width:160px;border:0;border-radius:12px;padding:12px 24px;color:#fff;font-weight:600;background:linear-gradient(90deg,var(--orange),var(--red));cursor:pointer}
.waitlist button:disabled{opacity:.5;cursor:not-allowed}.spinner{display:none;width:18px;height:18px;border:3px solid rgba(255,255,255,.3);border-top-color:#fff;border-radius:50%;animation:spin 1s linear infinite}
.waitlist button.loading .label{display:none}.waitlist button.loading .spinner{display:inline-block}@keyframes spin{to{transform:rotate(360deg)}}
.flow{max-width:1100px;margin-top:80px;text-align:center}.steps{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:48px;margin-top:48px}
.step-label{font-size:10px;font-weight:900;letter-spacing:.2em;text-transform:uppercase;color:var(--orange)}
.card{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:48px;max-width:1100px;width:100%;margin-top:72px;padding:48px;border:1px solid var(--line);border-radius:40px;background:#fafafa}
.features li{margin:12px 0;color:#52525b;font-weight:500}.panels{display:flex;flex-direction:column;gap:16px}
.panel{padding:24px;border:1px solid var(--line);border-radius:16px;background:#fff;display:flex;flex-wrap:wrap;gap:12px;justify-content:space-between;align-items:center}
.dot{width:8px;height:8px;border-radius:50%;background:#22c55e}.bar{width:100%;height:8px;background:#f4f4f5;border-radius:999px;overflow:hidden}.bar-fill{width:85%;height:100%;background:linear-gradient(90deg,var(--orange),var(--red))}
footer{display:flex;flex-wrap:wrap;gap:32px;justify-content:space-between;align-items:center;max-width:1100px;margin:0 auto;padding:48px 24px;border-top:1px solid var(--line);font-size:14px}
.toast{position:fixed;top:16px;right:16px;z-index:20;display:flex;gap:16px;align-items:center;padding:12px 16px;border-radius:10px;font-size:14px;box-shadow:0 10px 30px rgba(0,0,0,.1)}
.toast-success{background:#ecfdf5;color:#065f46}.toast-info{background:#eff6ff;color:#1e40af}.toast-error{background:#fef2f2;color:#991b1b}
.toast-close{border:0;background:transparent;font-size:18px;cursor:pointer;color:inherit}
"#;

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
