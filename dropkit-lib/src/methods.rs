//! Payment method data model.
//!
//! Payment methods arrive as a backend descriptor with two arrays: stored
//! instruments the shopper saved earlier and the regular methods the
//! merchant enabled. Each entry is discriminated by a `type` tag; the set
//! of tags is open, so the model closes over the variants the SDK can
//! render and keeps everything else in [`PaymentMethod::Other`].
//!
//! Entries carrying an `id` are stored instruments regardless of which
//! array they came from. Unrecognized types that carry an `issuers` array
//! classify as issuer-list (bank redirect) methods.

use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;

/// Type tag for card payments.
pub const TYPE_CARD: &str = "scheme";
/// Type tag for the region-specific bank card variant.
pub const TYPE_BANK_CARD: &str = "bcmc";
/// Type tag for SEPA direct debit.
pub const TYPE_BANK_TRANSFER: &str = "sepadirectdebit";
/// Type tag for the Apple Pay wallet.
pub const TYPE_APPLE_PAY: &str = "applepay";
/// Type tag for the Qiwi wallet.
pub const TYPE_QIWI_WALLET: &str = "qiwiwallet";
/// Type tag for MB WAY.
pub const TYPE_MBWAY: &str = "mbway";
/// Type tag for the WeChat Pay SDK flow.
pub const TYPE_CHAT_PAY: &str = "wechatpaySDK";

/// How a stored instrument may be charged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ShopperInteraction {
    /// The shopper is actively present in the session.
    #[serde(rename = "Ecommerce")]
    ShopperPresent,
    /// Merchant-initiated charge without the shopper present.
    #[serde(rename = "ContAuth")]
    ShopperNotPresent,
    /// Interaction kind this SDK version does not know.
    Unknown,
}

// Lenient by hand: the backend may grow interaction kinds this SDK
// version does not know, and decoding must not fail on them.
impl<'de> Deserialize<'de> for ShopperInteraction {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "Ecommerce" => Self::ShopperPresent,
            "ContAuth" => Self::ShopperNotPresent,
            _ => Self::Unknown,
        })
    }
}

/// Funding source of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingSource {
    /// Credit card.
    Credit,
    /// Debit card.
    Debit,
    /// Funding source this SDK version does not know.
    Unknown,
}

impl<'de> Deserialize<'de> for FundingSource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "credit" => Self::Credit,
            "debit" => Self::Debit,
            _ => Self::Unknown,
        })
    }
}

/// A selectable issuer for issuer-list (bank redirect) methods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    /// Issuer identifier submitted with the payment.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// A previously saved card.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredCardPaymentMethod {
    /// Stored instrument identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Card brand (e.g. "visa").
    pub brand: Option<String>,
    /// Last four digits of the card number.
    pub last_four: Option<String>,
    /// Expiry month.
    pub expiry_month: Option<String>,
    /// Expiry year.
    pub expiry_year: Option<String>,
    /// Cardholder name.
    pub holder_name: Option<String>,
    /// Funding source.
    pub funding_source: Option<FundingSource>,
    /// Interactions the instrument supports.
    pub supported_shopper_interactions: Vec<ShopperInteraction>,
}

/// A previously saved non-card instrument.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredInstrumentPaymentMethod {
    /// Stored instrument identifier.
    pub id: String,
    /// Original `type` tag of the instrument.
    pub type_tag: String,
    /// Display name.
    pub name: String,
    /// Interactions the instrument supports.
    pub supported_shopper_interactions: Vec<ShopperInteraction>,
}

/// Card entry form payment method.
#[derive(Clone, Debug, PartialEq)]
pub struct CardPaymentMethod {
    /// Display name.
    pub name: String,
    /// Card brands the merchant accepts.
    pub brands: Vec<String>,
}

/// Region-specific bank card variant (no security code entry).
#[derive(Clone, Debug, PartialEq)]
pub struct BankCardPaymentMethod {
    /// Display name.
    pub name: String,
}

/// Bank redirect method where the shopper picks their bank.
#[derive(Clone, Debug, PartialEq)]
pub struct IssuerListPaymentMethod {
    /// Original `type` tag (e.g. "ideal").
    pub type_tag: String,
    /// Display name.
    pub name: String,
    /// Banks the shopper can choose from.
    pub issuers: Vec<Issuer>,
}

/// SEPA direct debit.
#[derive(Clone, Debug, PartialEq)]
pub struct BankTransferPaymentMethod {
    /// Display name.
    pub name: String,
}

/// Apple Pay wallet.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplePayPaymentMethod {
    /// Display name.
    pub name: String,
}

/// Qiwi wallet.
#[derive(Clone, Debug, PartialEq)]
pub struct QiwiWalletPaymentMethod {
    /// Display name.
    pub name: String,
}

/// MB WAY wallet.
#[derive(Clone, Debug, PartialEq)]
pub struct MbWayPaymentMethod {
    /// Display name.
    pub name: String,
}

/// WeChat Pay via the native chat-application SDK.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatPayPaymentMethod {
    /// Display name.
    pub name: String,
}

/// Payment method this SDK version has no dedicated component for.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericPaymentMethod {
    /// Original `type` tag.
    pub type_tag: String,
    /// Display name.
    pub name: String,
}

/// A payment method the merchant enabled, discriminated by its `type` tag.
///
/// The set is closed at compile time apart from [`PaymentMethod::Other`],
/// which keeps unrecognized descriptors renderable as inert placeholders.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentMethod {
    /// A saved card.
    StoredCard(StoredCardPaymentMethod),
    /// A saved non-card instrument.
    StoredInstrument(StoredInstrumentPaymentMethod),
    /// Card entry form.
    Card(CardPaymentMethod),
    /// Region-specific bank card variant.
    BankCard(BankCardPaymentMethod),
    /// Bank redirect with issuer selection.
    IssuerList(IssuerListPaymentMethod),
    /// SEPA direct debit.
    BankTransfer(BankTransferPaymentMethod),
    /// Apple Pay wallet.
    ApplePay(ApplePayPaymentMethod),
    /// Qiwi wallet.
    QiwiWallet(QiwiWalletPaymentMethod),
    /// MB WAY wallet.
    MbWay(MbWayPaymentMethod),
    /// WeChat Pay SDK flow.
    ChatPay(ChatPayPaymentMethod),
    /// Anything the SDK does not recognize.
    Other(GenericPaymentMethod),
}

impl PaymentMethod {
    /// The backend `type` tag of this method.
    pub fn type_tag(&self) -> &str {
        match self {
            Self::StoredCard(_) | Self::Card(_) => TYPE_CARD,
            Self::StoredInstrument(method) => &method.type_tag,
            Self::BankCard(_) => TYPE_BANK_CARD,
            Self::IssuerList(method) => &method.type_tag,
            Self::BankTransfer(_) => TYPE_BANK_TRANSFER,
            Self::ApplePay(_) => TYPE_APPLE_PAY,
            Self::QiwiWallet(_) => TYPE_QIWI_WALLET,
            Self::MbWay(_) => TYPE_MBWAY,
            Self::ChatPay(_) => TYPE_CHAT_PAY,
            Self::Other(method) => &method.type_tag,
        }
    }

    /// Human-readable name from the descriptor.
    pub fn display_name(&self) -> &str {
        match self {
            Self::StoredCard(method) => &method.name,
            Self::StoredInstrument(method) => &method.name,
            Self::Card(method) => &method.name,
            Self::BankCard(method) => &method.name,
            Self::IssuerList(method) => &method.name,
            Self::BankTransfer(method) => &method.name,
            Self::ApplePay(method) => &method.name,
            Self::QiwiWallet(method) => &method.name,
            Self::MbWay(method) => &method.name,
            Self::ChatPay(method) => &method.name,
            Self::Other(method) => &method.name,
        }
    }

    /// Interactions a stored instrument supports; empty for regular methods.
    pub fn supported_shopper_interactions(&self) -> &[ShopperInteraction] {
        match self {
            Self::StoredCard(method) => &method.supported_shopper_interactions,
            Self::StoredInstrument(method) => &method.supported_shopper_interactions,
            _ => &[],
        }
    }

    /// Whether this instrument may be charged with the shopper present.
    pub fn supports_shopper_present(&self) -> bool {
        self.supported_shopper_interactions()
            .contains(&ShopperInteraction::ShopperPresent)
    }
}

/// Wire shape of a single descriptor entry, before classification.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPaymentMethod {
    #[serde(rename = "type")]
    method_type: String,
    #[serde(default)]
    name: String,
    id: Option<String>,
    brand: Option<String>,
    #[serde(default)]
    brands: Vec<String>,
    last_four: Option<String>,
    expiry_month: Option<String>,
    expiry_year: Option<String>,
    holder_name: Option<String>,
    funding_source: Option<FundingSource>,
    #[serde(default)]
    supported_shopper_interactions: Vec<ShopperInteraction>,
    #[serde(default)]
    issuers: Vec<Issuer>,
}

impl RawPaymentMethod {
    fn classify(self) -> PaymentMethod {
        // An `id` marks a stored instrument, whichever array it came from.
        if let Some(id) = self.id {
            if self.method_type == TYPE_CARD {
                return PaymentMethod::StoredCard(StoredCardPaymentMethod {
                    id,
                    name: self.name,
                    brand: self.brand,
                    last_four: self.last_four,
                    expiry_month: self.expiry_month,
                    expiry_year: self.expiry_year,
                    holder_name: self.holder_name,
                    funding_source: self.funding_source,
                    supported_shopper_interactions: self.supported_shopper_interactions,
                });
            }
            return PaymentMethod::StoredInstrument(StoredInstrumentPaymentMethod {
                id,
                type_tag: self.method_type,
                name: self.name,
                supported_shopper_interactions: self.supported_shopper_interactions,
            });
        }

        match self.method_type.as_str() {
            TYPE_CARD => PaymentMethod::Card(CardPaymentMethod {
                name: self.name,
                brands: self.brands,
            }),
            TYPE_BANK_CARD => PaymentMethod::BankCard(BankCardPaymentMethod { name: self.name }),
            TYPE_BANK_TRANSFER => {
                PaymentMethod::BankTransfer(BankTransferPaymentMethod { name: self.name })
            }
            TYPE_APPLE_PAY => PaymentMethod::ApplePay(ApplePayPaymentMethod { name: self.name }),
            TYPE_QIWI_WALLET => {
                PaymentMethod::QiwiWallet(QiwiWalletPaymentMethod { name: self.name })
            }
            TYPE_MBWAY => PaymentMethod::MbWay(MbWayPaymentMethod { name: self.name }),
            TYPE_CHAT_PAY => PaymentMethod::ChatPay(ChatPayPaymentMethod { name: self.name }),
            _ if !self.issuers.is_empty() => PaymentMethod::IssuerList(IssuerListPaymentMethod {
                type_tag: self.method_type,
                name: self.name,
                issuers: self.issuers,
            }),
            _ => PaymentMethod::Other(GenericPaymentMethod {
                type_tag: self.method_type,
                name: self.name,
            }),
        }
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawPaymentMethod::deserialize(deserializer).map(RawPaymentMethod::classify)
    }
}

/// The merchant's enabled payment methods, as served by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PaymentMethods {
    /// Instruments the shopper saved earlier.
    #[serde(default, rename = "storedPaymentMethods")]
    pub stored: Vec<PaymentMethod>,
    /// Regular methods the merchant enabled.
    #[serde(default, rename = "paymentMethods")]
    pub regular: Vec<PaymentMethod>,
}

impl PaymentMethods {
    /// Create a descriptor from already-classified methods.
    pub fn new(stored: Vec<PaymentMethod>, regular: Vec<PaymentMethod>) -> Self {
        Self { stored, regular }
    }

    /// Decode the backend descriptor JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"{
        "storedPaymentMethods": [
            {
                "type": "scheme",
                "id": "8415",
                "name": "VISA",
                "brand": "visa",
                "lastFour": "1111",
                "expiryMonth": "10",
                "expiryYear": "2030",
                "holderName": "J. Smithers",
                "fundingSource": "credit",
                "supportedShopperInteractions": ["Ecommerce", "ContAuth"]
            },
            {
                "type": "paypal",
                "id": "9921",
                "name": "PayPal",
                "supportedShopperInteractions": ["ContAuth"]
            }
        ],
        "paymentMethods": [
            { "type": "scheme", "name": "Credit Card", "brands": ["visa", "mc"] },
            { "type": "ideal", "name": "iDEAL", "issuers": [{ "id": "1121", "name": "Test Issuer" }] },
            { "type": "applepay", "name": "Apple Pay" },
            { "type": "ratepay", "name": "RatePay" }
        ]
    }"#;

    #[test]
    fn test_descriptor_classification() {
        let methods = PaymentMethods::from_json(DESCRIPTOR).unwrap();

        assert_eq!(methods.stored.len(), 2);
        match &methods.stored[0] {
            PaymentMethod::StoredCard(card) => {
                assert_eq!(card.id, "8415");
                assert_eq!(card.last_four.as_deref(), Some("1111"));
                assert_eq!(card.funding_source, Some(FundingSource::Credit));
            }
            other => panic!("expected stored card, got {other:?}"),
        }
        match &methods.stored[1] {
            PaymentMethod::StoredInstrument(instrument) => {
                assert_eq!(instrument.type_tag, "paypal");
            }
            other => panic!("expected stored instrument, got {other:?}"),
        }

        assert_eq!(methods.regular.len(), 4);
        assert!(matches!(&methods.regular[0], PaymentMethod::Card(card) if card.brands.len() == 2));
        assert!(matches!(
            &methods.regular[1],
            PaymentMethod::IssuerList(list) if list.type_tag == "ideal" && list.issuers.len() == 1
        ));
        assert!(matches!(&methods.regular[2], PaymentMethod::ApplePay(_)));
        assert!(matches!(
            &methods.regular[3],
            PaymentMethod::Other(generic) if generic.type_tag == "ratepay"
        ));
    }

    #[test]
    fn test_shopper_present_capability() {
        let methods = PaymentMethods::from_json(DESCRIPTOR).unwrap();
        assert!(methods.stored[0].supports_shopper_present());
        assert!(!methods.stored[1].supports_shopper_present());
        // Regular methods carry no interaction set.
        assert!(!methods.regular[0].supports_shopper_present());
    }

    #[test]
    fn test_type_tag_round_trip() {
        let methods = PaymentMethods::from_json(DESCRIPTOR).unwrap();
        assert_eq!(methods.stored[0].type_tag(), TYPE_CARD);
        assert_eq!(methods.regular[1].type_tag(), "ideal");
        assert_eq!(methods.regular[3].type_tag(), "ratepay");
    }

    #[test]
    fn test_unknown_interaction_does_not_fail_decoding() {
        let json = r#"{
            "storedPaymentMethods": [
                { "type": "scheme", "id": "1", "name": "VISA", "supportedShopperInteractions": ["Moto"] }
            ]
        }"#;
        let methods = PaymentMethods::from_json(json).unwrap();
        assert_eq!(
            methods.stored[0].supported_shopper_interactions(),
            &[ShopperInteraction::Unknown]
        );
        assert!(!methods.stored[0].supports_shopper_present());
    }

    #[test]
    fn test_empty_descriptor() {
        let methods = PaymentMethods::from_json("{}").unwrap();
        assert!(methods.stored.is_empty());
        assert!(methods.regular.is_empty());
    }

    #[test]
    fn test_malformed_descriptor_is_serialization_error() {
        let err = PaymentMethods::from_json("{").unwrap_err();
        assert_eq!(err.code(), crate::DropkitErrorCode::Serialization);
    }
}
