use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::Violation;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire token.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Violation;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(Violation::UnknownVariant {
                        path: stringify!($name).to_string(),
                        value: other.to_string(),
                        expected: [$($token),+].join(", "),
                    }),
                }
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

vocabulary!(
    /// Systems that produce or consume platform records.
    SourceSystem {
        /// Client hub.
        Hub => "hub",
        /// QuickBooks Online ledger leg.
        QboLeg => "qbo_leg",
        /// General-ledger leg.
        GlLeg => "gl_leg",
        /// AI classification translator.
        AiTranslator => "ai_translator",
        /// Messaging gateway.
        Messaging => "messaging",
        /// Tax estimation engine.
        TaxEngine => "tax_engine",
    }
);

vocabulary!(
    /// Chart-of-accounts classification.
    AccountType {
        /// Asset.
        Asset => "asset",
        /// Liability.
        Liability => "liability",
        /// Equity.
        Equity => "equity",
        /// Revenue.
        Revenue => "revenue",
        /// Expense.
        Expense => "expense",
        /// Cost of goods sold.
        CostOfGoodsSold => "cost_of_goods_sold",
        /// Other income.
        OtherIncome => "other_income",
        /// Other expense.
        OtherExpense => "other_expense",
    }
);

vocabulary!(
    /// Direction of a bank transaction.
    TransactionType {
        /// Money out.
        Debit => "debit",
        /// Money in.
        Credit => "credit",
    }
);

vocabulary!(
    /// Kind of bank account a transaction came from.
    BankAccountType {
        /// Checking.
        Checking => "checking",
        /// Savings.
        Savings => "savings",
        /// Credit card.
        CreditCard => "credit_card",
        /// Line of credit.
        LineOfCredit => "line_of_credit",
        /// Loan.
        Loan => "loan",
        /// Anything else.
        Other => "other",
    }
);

vocabulary!(
    /// Coarse bucket for a classifier confidence score.
    ConfidenceBand {
        /// High.
        High => "high",
        /// Medium.
        Medium => "medium",
        /// Low.
        Low => "low",
        /// Uncertain.
        Uncertain => "uncertain",
    }
);

vocabulary!(
    /// Where a classification came from.
    ClassificationSource {
        /// Deterministic rule.
        Rule => "rule",
        /// Model output.
        Ai => "ai",
        /// Historical pattern match.
        Historical => "historical",
        /// Client answer.
        Client => "client",
        /// Accountant decision.
        Accountant => "accountant",
    }
);

vocabulary!(
    /// Review state of a classification.
    ReviewStatus {
        /// Awaiting review.
        Pending => "pending",
        /// Approved as suggested.
        Approved => "approved",
        /// Rejected.
        Rejected => "rejected",
        /// Approved with changes.
        Modified => "modified",
        /// Applied without review.
        AutoApplied => "auto_applied",
    }
);

vocabulary!(
    /// Why a transaction was parked in suspense.
    SuspenseReason {
        /// Classifier confidence too low.
        LowConfidence => "low_confidence",
        /// Waiting on the client.
        NeedsClientInput => "needs_client_input",
        /// Deferred to the monthly call.
        MonthlyCall => "monthly_call",
        /// Client declined to answer.
        Declined => "declined",
        /// Clarification attempts exhausted.
        EscalatedMaxClarification => "escalated_max_clarification",
    }
);

vocabulary!(
    /// Severity of a risk flag.
    RiskSeverity {
        /// Low.
        Low => "low",
        /// Medium.
        Medium => "medium",
        /// High.
        High => "high",
        /// Critical.
        Critical => "critical",
    }
);

vocabulary!(
    /// Direction of a message relative to the platform.
    MessageDirection {
        /// Received from a contact.
        Inbound => "inbound",
        /// Sent to a contact.
        Outbound => "outbound",
    }
);

vocabulary!(
    /// Delivery state of an outbound message.
    MessageStatus {
        /// Accepted, not yet sent.
        Queued => "queued",
        /// Handed to the channel.
        Sent => "sent",
        /// Delivered to the device.
        Delivered => "delivered",
        /// Read by the contact.
        Read => "read",
        /// Delivery failed.
        Failed => "failed",
    }
);

vocabulary!(
    /// Messaging consent state.
    ConsentType {
        /// Contact opted in.
        OptIn => "opt_in",
        /// Contact opted out.
        OptOut => "opt_out",
        /// Consent revoked.
        Revoked => "revoked",
    }
);

vocabulary!(
    /// Lifecycle of a conversation session.
    ConversationStatus {
        /// In progress.
        Active => "active",
        /// Waiting for the contact.
        WaitingReply => "waiting_reply",
        /// Contact did not answer in time.
        TimedOut => "timed_out",
        /// Flow finished.
        Completed => "completed",
    }
);

vocabulary!(
    /// Legal form of a client business.
    EntityType {
        /// Sole proprietor.
        SoleProprietor => "sole_proprietor",
        /// Limited liability company.
        Llc => "llc",
        /// S corporation.
        SCorp => "s_corp",
        /// C corporation.
        CCorp => "c_corp",
        /// Partnership.
        Partnership => "partnership",
    }
);

vocabulary!(
    /// Federal return a business files.
    TaxFilingType {
        /// Schedule C.
        ScheduleC => "schedule_c",
        /// Form 1120-S.
        Form1120s => "form_1120s",
        /// Form 1120.
        Form1120 => "form_1120",
        /// Form 1065.
        Form1065 => "form_1065",
    }
);
