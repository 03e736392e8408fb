//! Pre-authored support answers, one entry per intent.
//!
//! The table is built once per process and never changes afterwards.

use std::sync::LazyLock;

use super::types::{ContactChannel, Intent, SuggestedAction};

/// Response template and follow-ups for one intent.
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    pub template: &'static str,
    pub actions: Vec<SuggestedAction>,
}

/// Immutable `Intent → KnowledgeEntry` table.
#[derive(Debug)]
pub struct KnowledgeBase {
    getting_started: KnowledgeEntry,
    agent_error: KnowledgeEntry,
    billing: KnowledgeEntry,
    account_access: KnowledgeEntry,
    fallback: KnowledgeEntry,
}

static KNOWLEDGE: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::build);

impl KnowledgeBase {
    /// The process-wide table.
    pub fn global() -> &'static KnowledgeBase {
        &KNOWLEDGE
    }

    pub fn entry(&self, intent: Intent) -> &KnowledgeEntry {
        match intent {
            Intent::GettingStarted => &self.getting_started,
            Intent::AgentError => &self.agent_error,
            Intent::Billing => &self.billing,
            Intent::AccountAccess => &self.account_access,
            Intent::Fallback => &self.fallback,
        }
    }

    /// Short product overview used as the preamble of the context string.
    pub fn preamble(&self) -> &'static str {
        PREAMBLE
    }

    fn build() -> Self {
        Self {
            getting_started: KnowledgeEntry {
                template: GETTING_STARTED,
                actions: vec![
                    SuggestedAction::link("Create Account", "/signup"),
                    SuggestedAction::link("Browse Agents", "/agents"),
                    SuggestedAction::link("View Pricing", "/pricing"),
                    SuggestedAction::link("Try Playground", "/playground"),
                ],
            },
            agent_error: KnowledgeEntry {
                template: AGENT_ERROR,
                actions: vec![
                    SuggestedAction::link("Test in Playground", "/playground"),
                    SuggestedAction::link("Check Agent Status", "/status"),
                    SuggestedAction::link("Troubleshooting Guide", "/docs/troubleshooting"),
                    SuggestedAction::link("View Usage Logs", "/dashboard/logs"),
                    SuggestedAction::contact("Chat with Support", ContactChannel::LiveChat),
                ],
            },
            billing: KnowledgeEntry {
                template: BILLING,
                actions: vec![
                    SuggestedAction::link("View Pricing", "/pricing"),
                    SuggestedAction::link("Billing Settings", "/dashboard/billing"),
                    SuggestedAction::link("Credit Usage", "/dashboard/usage"),
                    SuggestedAction::contact("Email Billing Team", ContactChannel::Email),
                ],
            },
            account_access: KnowledgeEntry {
                template: ACCOUNT_ACCESS,
                actions: vec![
                    SuggestedAction::link("Reset Password", "/login"),
                    SuggestedAction::link("Create Account", "/signup"),
                    SuggestedAction::link("Account Settings", "/dashboard/settings"),
                    SuggestedAction::contact("Email Support", ContactChannel::Email),
                ],
            },
            fallback: KnowledgeEntry {
                template: FALLBACK,
                actions: vec![
                    SuggestedAction::link("Browse Agents", "/agents"),
                    SuggestedAction::link("Documentation", "/docs"),
                    SuggestedAction::link("View Pricing", "/pricing"),
                    SuggestedAction::contact("Chat with Support", ContactChannel::LiveChat),
                ],
            },
        }
    }
}

const PREAMBLE: &str = "\
You are the support assistant for an AI agent marketplace. Customers browse \
pre-built agents (customer support, content, data analysis, sales), try them \
in the Playground, and pay per run with prepaid credits or a monthly \
subscription. Answer briefly and point to the relevant page.";

const GETTING_STARTED: &str = "\
**Welcome! Getting started takes about five minutes.**

1. **Create your account** at the sign-up page. New accounts include free \
starter credits.
2. **Browse the catalog** and pick an agent that fits your use case. Each \
listing shows capabilities, pricing per run, and sample output.
3. **Try it in the Playground** before deploying. You can send test inputs \
and inspect the JSON result without spending credits.
4. **Pick a plan** when you are ready for production traffic. Pay-as-you-go \
and monthly plans are compared on the pricing page.

Once an agent is deployed you get an API key and endpoint you can call from \
your own application.";

const AGENT_ERROR: &str = "\
**Sorry your agent is giving you trouble. Let's narrow it down.**

**Quick checks**
- Run the same input in the **Playground**. If it works there, the issue is \
likely in how your application calls the API.
- Check the **status page** for ongoing incidents.
- Confirm your account still has **credits**. Runs stop when the balance \
reaches zero.

**Common causes**
- *Timeouts*: very large inputs can exceed the per-run time limit. Split the \
input or switch to the batch endpoint.
- *Authentication errors*: regenerate the API key from your dashboard and \
update your integration.
- *Malformed input*: compare your payload against the schema shown on the \
agent's listing.

If none of this helps, send us the run ID from your usage logs and we'll \
investigate.";

const BILLING: &str = "\
**Here's how billing works.**

- **Credits** are consumed per agent run. The cost of each run is shown on \
the agent's listing and in your usage dashboard.
- **Subscriptions** renew monthly and include a credit allowance. Unused \
plan credits do not roll over.
- **Payment methods** can be updated under Billing Settings. We accept major \
cards; invoices are available for annual plans.
- **Refunds** for failed runs are credited back automatically within 24 hours.

For questions about a specific charge, email the billing team with the \
invoice number.";

const ACCOUNT_ACCESS: &str = "\
**Let's get you back into your account.**

**Can't log in?**
- Use **Forgot Password** on the login page. The reset link is valid for \
one hour.
- Check your spam folder if the email doesn't arrive within a few minutes.
- Make sure you're signing in with the same email you registered with.

**Still locked out?**
- Accounts lock for 15 minutes after several failed attempts.
- If you signed up through a team invitation, ask your team admin to resend it.

Contact support if you no longer have access to your registered email.";

const FALLBACK: &str = "\
**Thanks for reaching out!**

I can help with:
- **Getting started**: creating an account and choosing your first agent
- **Agent issues**: errors, timeouts, or unexpected output
- **Billing**: credits, subscriptions, and payments
- **Account access**: login and password problems

Could you tell me a bit more about what you need? You can also browse the \
documentation or chat with our support team directly.";
