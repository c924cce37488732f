//! Wire types exchanged with the partner payment gateway.
//!
//! The plaintext [`CollectionRecord`] is never sent as-is: it is serialised,
//! encrypted, and carried as a base64 string inside an [`Envelope`].

use serde::{Deserialize, Serialize};

use crate::wire::serialize_amount;

// ---------------------------------------------------------------------------
// Plaintext record
// ---------------------------------------------------------------------------

/// A single payment-collection transaction.
///
/// Field names follow the partner's JSON contract exactly. Fields missing from
/// caller input default to an empty string or zero. Encode with
/// [`crate::wire::to_vec`] to get the bytes the partner expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionRecord {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "ProspectNo")]
    pub prospect_no: String,
    #[serde(rename = "ProductCode")]
    pub product_code: String,
    #[serde(rename = "AdvancedEMI", serialize_with = "serialize_amount")]
    pub advanced_emi: f64,
    #[serde(rename = "EMI_OTC", serialize_with = "serialize_amount")]
    pub emi_otc: f64,
    #[serde(rename = "BounceChequeCharges", serialize_with = "serialize_amount")]
    pub bounce_cheque_charges: f64,
    #[serde(rename = "PenalCharges", serialize_with = "serialize_amount")]
    pub penal_charges: f64,
    #[serde(rename = "ProcessingFee_IMD", serialize_with = "serialize_amount")]
    pub processing_fee_imd: f64,
    #[serde(rename = "PreEMI", serialize_with = "serialize_amount")]
    pub pre_emi: f64,
    #[serde(rename = "SwapCharges", serialize_with = "serialize_amount")]
    pub swap_charges: f64,
    #[serde(rename = "ForeClosure", serialize_with = "serialize_amount")]
    pub fore_closure: f64,
    #[serde(rename = "OtherCharges", serialize_with = "serialize_amount")]
    pub other_charges: f64,
    #[serde(rename = "TotalAmount", serialize_with = "serialize_amount")]
    pub total_amount: f64,
    #[serde(rename = "PaymentMode")]
    pub payment_mode: String,
    #[serde(rename = "BankName")]
    pub bank_name: String,
    #[serde(rename = "ChequeNo")]
    pub cheque_no: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "Reason")]
    pub reason: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Status")]
    pub status: String,
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Application identity sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeHead {
    pub app_name: String,
    pub app_version: String,
}

/// Encrypted payload carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeBody {
    /// Base64 ciphertext of the serialised [`CollectionRecord`].
    pub data: String,
}

/// Request body posted to the gateway:
/// `{"head":{"appName":..,"appVersion":..},"body":{"data":..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub head: EnvelopeHead,
    pub body: EnvelopeBody,
}

impl Envelope {
    /// Wrap already-encrypted `data` under the given application head.
    pub fn new(head: EnvelopeHead, data: impl Into<String>) -> Self {
        Self {
            head,
            body: EnvelopeBody { data: data.into() },
        }
    }
}
