//! Unit tests for the structured sentiment pipeline.

#[cfg(test)]
mod sentiment_tests {
    use crate::error::AnalysisError;
    use crate::llm::{GroundedReply, LanguageApi};
    use crate::services::sentiment::{parse_verdict, verdict_schema, SentimentAnalyzer};
    use crate::types::SentimentLabel;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    /// Provider stub that replays a canned structured payload.
    struct FixtureProvider {
        payload: Option<String>,
    }

    #[async_trait]
    impl LanguageApi for FixtureProvider {
        fn name(&self) -> &'static str {
            "fixture"
        }

        async fn structured_verdict(
            &self,
            _system_prompt: &str,
            _user_input: &str,
            _schema: Value,
        ) -> Result<Option<String>, AnalysisError> {
            Ok(self.payload.clone())
        }

        async fn grounded_report(&self, _prompt: &str) -> Result<GroundedReply, AnalysisError> {
            Ok(GroundedReply::default())
        }
    }

    fn valid_payload() -> Value {
        serde_json::json!({
            "sentimentScore": 0.62,
            "sentimentLabel": "Bullish",
            "confidence": 0.9,
            "entities": ["NVDA", "TSMC"],
            "summary": "Chip demand lifts the sector.",
            "marketPrediction": "Stocks likely to rise in short term."
        })
    }

    // ============= parse_verdict Tests =============

    #[test]
    fn test_valid_payload_round_trips() {
        let result = parse_verdict(&valid_payload().to_string()).unwrap();

        assert_eq!(result.sentiment_score, 0.62);
        assert_eq!(result.sentiment_label, SentimentLabel::Bullish);
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.entities, vec!["NVDA", "TSMC"]);
        assert_eq!(result.summary, "Chip demand lifts the sector.");
        assert_eq!(
            result.market_prediction,
            "Stocks likely to rise in short term."
        );
    }

    #[test]
    fn test_every_missing_field_is_rejected() {
        let required = [
            "sentimentScore",
            "sentimentLabel",
            "confidence",
            "entities",
            "summary",
            "marketPrediction",
        ];

        for field in required {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(field);

            let err = parse_verdict(&payload.to_string()).unwrap_err();
            assert!(
                matches!(err, AnalysisError::Validation(_)),
                "dropping {} should fail validation",
                field
            );
        }
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let mut payload = valid_payload();
        payload["sentimentScore"] = Value::String("very positive".to_string());

        let err = parse_verdict(&payload.to_string()).unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn test_label_outside_enum_is_rejected() {
        let mut payload = valid_payload();
        payload["sentimentLabel"] = Value::String("Sideways".to_string());

        let err = parse_verdict(&payload.to_string()).unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn test_empty_summary_is_rejected() {
        let mut payload = valid_payload();
        payload["summary"] = Value::String("  ".to_string());

        let err = parse_verdict(&payload.to_string()).unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn test_non_json_payload_is_rejected() {
        let err = parse_verdict("The market feels bullish today.").unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn test_unknown_extra_fields_are_tolerated() {
        let mut payload = valid_payload();
        payload["vendorNote"] = Value::String("ignored".to_string());

        assert!(parse_verdict(&payload.to_string()).is_ok());
    }

    #[test]
    fn test_out_of_domain_score_is_taken_at_face_value() {
        // Domain violations are provider contract breaches; no re-clamping.
        let mut payload = valid_payload();
        payload["sentimentScore"] = serde_json::json!(1.7);

        let result = parse_verdict(&payload.to_string()).unwrap();
        assert_eq!(result.sentiment_score, 1.7);
    }

    // ============= Schema Tests =============

    #[test]
    fn test_schema_requires_all_six_fields() {
        let schema = verdict_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(required.len(), 6);
        for field in [
            "sentimentScore",
            "sentimentLabel",
            "confidence",
            "entities",
            "summary",
            "marketPrediction",
        ] {
            assert!(required.contains(&field), "{} must be required", field);
        }
    }

    #[test]
    fn test_schema_restricts_label_to_three_values() {
        let schema = verdict_schema();
        let labels = schema["properties"]["sentimentLabel"]["enum"]
            .as_array()
            .unwrap();

        assert_eq!(labels.len(), 3);
        assert!(labels.contains(&serde_json::json!("Bullish")));
        assert!(labels.contains(&serde_json::json!("Bearish")));
        assert!(labels.contains(&serde_json::json!("Neutral")));
    }

    // ============= Analyzer Tests =============

    #[tokio::test]
    async fn test_analyze_returns_typed_result() {
        let analyzer = SentimentAnalyzer::new(Arc::new(FixtureProvider {
            payload: Some(valid_payload().to_string()),
        }));

        let result = analyzer.analyze("Fed signals a pause").await.unwrap();
        assert_eq!(result.sentiment_label, SentimentLabel::Bullish);
    }

    #[tokio::test]
    async fn test_blank_input_fails_before_any_call() {
        // The fixture would produce a Validation error if it were reached.
        let analyzer = SentimentAnalyzer::new(Arc::new(FixtureProvider {
            payload: Some("not json".to_string()),
        }));

        let err = analyzer.analyze("   \n").await.unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[tokio::test]
    async fn test_empty_provider_content_fails_typed() {
        let analyzer = SentimentAnalyzer::new(Arc::new(FixtureProvider { payload: None }));

        let err = analyzer.analyze("Oil spikes on supply fears").await.unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResponse));
    }
}
