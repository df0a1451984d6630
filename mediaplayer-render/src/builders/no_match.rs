use tracing::trace;

use super::Builder;
use crate::error::{RenderError, RenderResult};

/// Sentinel returned when no strategy could classify the media object.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMatchBuilder;

impl Builder for NoMatchBuilder {
    fn name(&self) -> &'static str {
        "no-match"
    }

    fn to_html(&self) -> RenderResult<String> {
        trace!("no builder matched, reporting unknown media type");
        Err(RenderError::UnknownMediaType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_fails() {
        assert_eq!(NoMatchBuilder.to_html(), Err(RenderError::UnknownMediaType));
        assert_eq!(NoMatchBuilder.to_html(), Err(RenderError::UnknownMediaType));
    }
}
