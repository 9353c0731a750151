//! # Decode Orchestrator
//!
//! Runs a [`Model`] against a [`Submission`]:
//!
//! 1. group the submission into a record,
//! 2. decode the record with the model's composed schema through the
//!    injected validator,
//! 3. on failure, collect actual values, format messages, and merge both
//!    into a [`ParseError`].
//!
//! The issue tree never leaves this module. The orchestrator adds no rules
//! of its own; it only reshapes the validator's failure.

use formwise_core::{ParseOptions, Value};
use formwise_schema::{
    ArrayFormatter, AsyncValidator, Issue, IssueFormatter, SchemaValidator, Validator,
};

use crate::collect::collect_actuals;
use crate::error::ParseError;
use crate::merge::merge_issues;
use crate::model::Model;
use crate::submission::Submission;

/// Decodes submissions against form models.
///
/// Both capabilities are injected: `V` runs the schema and `F` turns a
/// failure into per-path messages.
#[derive(Debug, Clone, Default)]
pub struct FormDecoder<V = SchemaValidator, F = ArrayFormatter> {
    validator: V,
    formatter: F,
    options: ParseOptions,
}

impl FormDecoder {
    /// Decoder with the default validator, formatter and options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder with the default capabilities and the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }
}

impl<V, F: IssueFormatter> FormDecoder<V, F> {
    /// Decoder with custom capabilities.
    pub fn with_parts(validator: V, formatter: F, options: ParseOptions) -> Self {
        Self {
            validator,
            formatter,
            options,
        }
    }

    /// Options passed to every decode.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Reshape a validator failure into the path-keyed mapping.
    pub fn parse_error(&self, issue: &Issue) -> ParseError {
        let actuals = collect_actuals(issue);
        let formatted = self.formatter.format_issue(issue);
        ParseError::new(merge_issues(&actuals, &formatted))
    }

    fn reject(&self, issue: Issue) -> ParseError {
        let error = self.parse_error(&issue);
        tracing::debug!(paths = error.len(), "form submission rejected");
        error
    }
}

impl<V: Validator, F: IssueFormatter> FormDecoder<V, F> {
    /// Decode `submission` against `model`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] keyed by dotted field path when the
    /// submission does not satisfy the model.
    pub fn decode(&self, model: &Model, submission: &Submission) -> Result<Value, ParseError> {
        tracing::debug!(
            fields = model.len(),
            entries = submission.len(),
            "decoding form submission"
        );
        match model
            .record_schema()
            .decode(&self.validator, submission, &self.options)
        {
            Ok(value) => {
                tracing::debug!("form submission accepted");
                Ok(value)
            }
            Err(issue) => Err(self.reject(issue)),
        }
    }

    /// Encode a decoded value back into a submission.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when `value` does not satisfy the model.
    pub fn encode(&self, model: &Model, value: &Value) -> Result<Submission, ParseError> {
        model
            .record_schema()
            .encode(&self.validator, value, &self.options)
            .map_err(|issue| self.reject(issue))
    }
}

impl<V: AsyncValidator, F: IssueFormatter> FormDecoder<V, F> {
    /// Decode with a validator that may suspend. Failures are reshaped
    /// exactly as in [`FormDecoder::decode`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] keyed by dotted field path when the
    /// submission does not satisfy the model.
    pub async fn decode_async(
        &self,
        model: &Model,
        submission: &Submission,
    ) -> Result<Value, ParseError> {
        tracing::debug!(
            fields = model.len(),
            entries = submission.len(),
            "decoding form submission"
        );
        match model
            .record_schema()
            .decode_async(&self.validator, submission, &self.options)
            .await
        {
            Ok(value) => {
                tracing::debug!("form submission accepted");
                Ok(value)
            }
            Err(issue) => Err(self.reject(issue)),
        }
    }
}

/// Bind a model to the default decoder.
///
/// ```
/// use formwise_form::{decode_form_model, Field, Model, Submission};
/// use formwise_schema::{int_from_string, SchemaExt};
///
/// let age = int_from_string().greater_than_or_equal_to(18.0);
/// let model = Model::new([("age", Field::new(age))]).unwrap();
/// let decode = decode_form_model(&model);
///
/// let ok: Submission = [("age", "18")].into_iter().collect();
/// assert!(decode(&ok).is_ok());
///
/// let young: Submission = [("age", "17")].into_iter().collect();
/// assert!(decode(&young).unwrap_err().message("age").is_some());
/// ```
pub fn decode_form_model(model: &Model) -> impl Fn(&Submission) -> Result<Value, ParseError> + '_ {
    let decoder = FormDecoder::new();
    move |submission| decoder.decode(model, submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use formwise_core::ExcessProperty;
    use formwise_schema::{int_from_string, string, FormattedIssue, IssueTag, SchemaExt};

    fn adult() -> Model {
        let age = int_from_string().greater_than_or_equal_to(18.0);
        Model::new([("age", Field::new(age))]).unwrap()
    }

    fn submission(pairs: &[(&str, &str)]) -> Submission {
        pairs.iter().copied().collect()
    }

    #[test]
    fn accepts_valid_submission() {
        let value = FormDecoder::new()
            .decode(&adult(), &submission(&[("age", "18")]))
            .unwrap();
        assert_eq!(value.get("age"), Some(&Value::Int(18)));
    }

    #[test]
    fn failure_surfaces_decoded_value_and_default_message() {
        let err = FormDecoder::new()
            .decode(&adult(), &submission(&[("age", "17")]))
            .unwrap_err();
        assert_eq!(err.paths().collect::<Vec<_>>(), vec!["age"]);
        assert_eq!(err.actual("age"), Some(&Value::Int(17)));
        assert_eq!(
            err.message("age"),
            Some("Expected a number greater than or equal to 18, actual 17")
        );
    }

    #[test]
    fn transformation_failure_reports_raw_text() {
        let err = FormDecoder::new()
            .decode(&adult(), &submission(&[("age", "abc")]))
            .unwrap_err();
        assert_eq!(err.actual("age"), Some(&Value::from("abc")));
        assert_eq!(
            err.message("age"),
            Some("Unable to decode \"abc\" into an integer")
        );
    }

    #[test]
    fn first_error_option_stops_after_one_field() {
        let fields = [("a", Field::new(string())), ("b", Field::new(string()))];
        let model = Model::new(fields).unwrap();
        let empty = Submission::new();

        let all = FormDecoder::new().decode(&model, &empty).unwrap_err();
        assert_eq!(all.len(), 2);

        let first = FormDecoder::with_options(ParseOptions::default().first_error())
            .decode(&model, &empty)
            .unwrap_err();
        assert_eq!(first.paths().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn excess_keys_can_be_rejected() {
        let options = ParseOptions::default().on_excess_property(ExcessProperty::Error);
        let err = FormDecoder::with_options(options)
            .decode(&adult(), &submission(&[("age", "20"), ("admin", "yes")]))
            .unwrap_err();
        assert_eq!(err.actual("admin"), Some(&Value::from("yes")));
        assert!(err.get("age").is_none());
    }

    #[derive(Debug, Default)]
    struct Shouting;

    impl IssueFormatter for Shouting {
        fn format_issue(&self, issue: &Issue) -> Vec<FormattedIssue> {
            ArrayFormatter
                .format_issue(issue)
                .into_iter()
                .map(|mut entry| {
                    entry.message = entry.message.to_uppercase();
                    entry
                })
                .collect()
        }
    }

    #[test]
    fn formatter_is_injectable() {
        let decoder = FormDecoder::with_parts(SchemaValidator, Shouting, ParseOptions::default());
        let model = Model::new([("name", Field::new(string()))]).unwrap();
        let err = decoder.decode(&model, &Submission::new()).unwrap_err();
        assert_eq!(err.message("name"), Some("IS MISSING"));
    }

    #[test]
    fn parse_error_covers_hand_built_trees() {
        let issue = Issue::pointer(["token"], None, Issue::forbidden(Some(Value::from("x"))));
        let err = FormDecoder::new().parse_error(&issue);
        assert_eq!(err.message("token"), Some("is forbidden"));
        assert_eq!(err.actual("token"), Some(&Value::from("x")));
        let formatted = ArrayFormatter.format_issue(&issue);
        assert_eq!(formatted[0].tag, IssueTag::Forbidden);
    }

    #[test]
    fn encode_round_trips_through_submission() {
        let decoder = FormDecoder::new();
        let model = adult();
        let body = submission(&[("age", "30")]);
        let value = decoder.decode(&model, &body).unwrap();
        let back = decoder.encode(&model, &value).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn encode_rejects_values_outside_the_model() {
        let value = Value::Object([("age", Value::Int(12))].into_iter().collect());
        let err = FormDecoder::new().encode(&adult(), &value).unwrap_err();
        assert!(err.get("age").is_some());
    }

    #[tokio::test]
    async fn async_decode_matches_sync_decode() {
        let decoder = FormDecoder::new();
        let model = adult();
        let young = submission(&[("age", "17")]);
        let sync = decoder.decode(&model, &young);
        let asynchronous = decoder.decode_async(&model, &young).await;
        assert_eq!(sync, asynchronous);
    }

    #[test]
    fn bound_decoder_closure() {
        let model = adult();
        let decode = decode_form_model(&model);
        assert!(decode(&submission(&[("age", "40")])).is_ok());
        assert!(decode(&submission(&[])).is_err());
    }
}
