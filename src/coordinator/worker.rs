//! One-shot background worker for a single translation request.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use super::{Coordinator, Submission, TranslationRecord, View};
use crate::event_loop::UiHandle;
use crate::translation::{GatewayError, LanguageCatalog, TranslationGateway};

/// A request with resolved codes, as handed to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_code: String,
    pub target_code: String,
    pub text: String,
}

impl TranslationRequest {
    pub fn resolve(submission: &Submission, catalog: &LanguageCatalog) -> Result<Self, GatewayError> {
        Ok(Self {
            source_code: catalog.resolve_source(&submission.source_label)?,
            target_code: catalog.resolve_target(&submission.target_label)?,
            text: submission.text.clone(),
        })
    }
}

/// What the worker reports back to the UI thread.
pub(super) struct Outcome {
    pub generation: u64,
    pub result: Result<TranslationRecord, GatewayError>,
}

pub(super) fn translate(
    submission: Submission,
    catalog: &LanguageCatalog,
    gateway: &dyn TranslationGateway,
) -> Result<TranslationRecord, GatewayError> {
    let request = TranslationRequest::resolve(&submission, catalog)?;
    crate::debug!(
        "translating {} chars: {} -> {}",
        request.text.chars().count(),
        request.source_code,
        request.target_code
    );

    let translation = gateway.translate(&request.text, &request.source_code, &request.target_code)?;

    Ok(TranslationRecord {
        original: submission.text,
        translated: translation.text,
        source_label: submission.source_label,
        target_label: submission.target_label,
        detected_source: translation.detected_source,
    })
}

/// Starts a fresh thread for one request. The thread never touches UI state;
/// its only side effect is posting the outcome back through `handle`.
pub(super) fn spawn<V: View + 'static>(
    generation: u64,
    submission: Submission,
    catalog: Arc<LanguageCatalog>,
    gateway: Arc<dyn TranslationGateway>,
    handle: UiHandle<Coordinator<V>>,
) -> io::Result<()> {
    thread::Builder::new()
        .name(format!("translate-{generation}"))
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                translate(submission, &catalog, gateway.as_ref())
            }))
            .unwrap_or_else(|_| {
                Err(GatewayError::Internal(
                    "the translation worker crashed".to_string(),
                ))
            });

            let outcome = Outcome { generation, result };
            if handle
                .post(move |coordinator, _| coordinator.complete(outcome))
                .is_err()
            {
                crate::debug!("request #{generation} finished after the UI shut down");
            }
        })?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::Translation;

    struct Echo;

    impl TranslationGateway for Echo {
        fn translate(
            &self,
            text: &str,
            source: &str,
            target: &str,
        ) -> Result<Translation, GatewayError> {
            Ok(Translation {
                text: format!("{text} [{source}->{target}]"),
                detected_source: Some("en".to_string()),
            })
        }
    }

    fn submission(source: &str, target: &str) -> Submission {
        Submission {
            text: "Hello".to_string(),
            source_label: source.to_string(),
            target_label: target.to_string(),
        }
    }

    #[test]
    fn test_resolve_request() {
        let catalog = LanguageCatalog::builtin();
        let request = TranslationRequest::resolve(&submission("Auto", "French"), &catalog).unwrap();
        assert_eq!(
            request,
            TranslationRequest {
                source_code: "auto".to_string(),
                target_code: "fr".to_string(),
                text: "Hello".to_string(),
            }
        );
    }

    #[test]
    fn test_translate_passes_codes_and_keeps_labels() {
        let catalog = LanguageCatalog::builtin();
        let record = translate(submission("German", "Japanese"), &catalog, &Echo).unwrap();

        assert_eq!(record.translated, "Hello [de->ja]");
        assert_eq!(record.original, "Hello");
        assert_eq!(record.source_label, "German");
        assert_eq!(record.target_label, "Japanese");
        assert_eq!(record.detected_source.as_deref(), Some("en"));
    }

    #[test]
    fn test_translate_lookup_miss_is_gateway_error() {
        let catalog = LanguageCatalog::builtin();
        let err = translate(submission("Auto", "Elvish"), &catalog, &Echo).unwrap_err();
        assert_eq!(err, GatewayError::UnknownLanguage("Elvish".to_string()));
    }
}
