use thiserror::Error;

use crate::analysis::{AnalysisClient, AnalysisError, AnalysisResult, AnalysisTransport, HttpTransport};
use crate::extract::{ExtractError, ImageExtractor, ImageSource};
use crate::geometry::{to_image_space_within, RenderedBounds, Size, ViewportRect};
use crate::render::{PanelHost, ResultRenderer};
use crate::selection::SelectionResult;

use super::{Notice, Notifier};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractError),
    #[error("analysis request failed: {0}")]
    Transport(#[source] AnalysisError),
    #[error("analysis response carried no colors")]
    EmptyResult,
}

impl From<AnalysisError> for PipelineError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::MissingColors => Self::EmptyResult,
            other => Self::Transport(other),
        }
    }
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Geometry of the displayed image at the moment a selection was released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageLayout {
    pub viewport: Size,
    pub rendered: RenderedBounds,
    pub natural: Size,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionRequest {
    pub selection: ViewportRect,
    pub layout: ImageLayout,
}

/// The post-release half of a session: map, extract, analyze. Runs off the UI thread.
#[derive(Debug)]
pub struct SessionPipeline<T = HttpTransport> {
    source: ImageSource,
    extractor: ImageExtractor,
    client: AnalysisClient<T>,
}

impl<T: AnalysisTransport> SessionPipeline<T> {
    pub fn new(source: ImageSource, extractor: ImageExtractor, client: AnalysisClient<T>) -> Self {
        Self {
            source,
            extractor,
            client,
        }
    }

    pub fn run(&self, request: SessionRequest) -> PipelineResult<AnalysisResult> {
        let layout = request.layout;
        let image_rect = to_image_space_within(request.selection, layout.rendered, layout.natural);
        tracing::info!(
            viewport_width = layout.viewport.width,
            viewport_height = layout.viewport.height,
            rendered_x = layout.rendered.x,
            rendered_y = layout.rendered.y,
            x = image_rect.x,
            y = image_rect.y,
            width = image_rect.w,
            height = image_rect.h,
            "analyzing selection"
        );

        let crop = self.extractor.extract(&self.source, image_rect)?;
        let result = self.client.analyze(&crop)?;
        Ok(result)
    }
}

/// Gate between a finished drag and the pipeline. Rejected selections are
/// reported and never reach extraction.
pub fn accept_selection(
    selection: SelectionResult<ViewportRect>,
    notifier: &impl Notifier,
) -> Option<ViewportRect> {
    match selection {
        Ok(rect) => Some(rect),
        Err(err) => {
            tracing::info!(%err, "selection rejected");
            notifier.notify(Notice::from(&err));
            None
        }
    }
}

/// Shows a finished session's outcome. Failures leave any earlier panel in place.
pub fn deliver_outcome<H: PanelHost>(
    outcome: PipelineResult<AnalysisResult>,
    anchor: ViewportRect,
    renderer: &mut ResultRenderer<H>,
    notifier: &impl Notifier,
) {
    match outcome {
        Ok(result) => renderer.render(&result, anchor.origin()),
        Err(err) => {
            tracing::warn!(%err, "color analysis session failed");
            notifier.notify(Notice::from(&err));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;
    use crate::analysis::transport_testing::serve_once;
    use crate::analysis::{ClientResult, HttpResponse};
    use crate::geometry::{fit_within, ViewportPoint};
    use crate::pipeline::notice::testing::RecordingNotifier;
    use crate::render::renderer_testing::RecordingHost;
    use crate::selection::{SelectionError, MIN_SELECTION_SIZE};

    struct CountingTransport {
        calls: AtomicUsize,
        body: &'static str,
    }

    impl AnalysisTransport for CountingTransport {
        fn post_json(&self, _url: &str, _body: &str) -> ClientResult<HttpResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse {
                status: 200,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    fn png_source(width: u32, height: u32) -> ImageSource {
        let raster = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut bytes = Cursor::new(Vec::new());
        raster
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("png encode");
        ImageSource::Memory(Arc::from(bytes.into_inner()))
    }

    fn full_window_layout() -> ImageLayout {
        ImageLayout {
            viewport: Size::new(800.0, 600.0),
            rendered: RenderedBounds::new(0.0, 0.0, 800.0, 600.0),
            natural: Size::new(1600.0, 1200.0),
        }
    }

    fn counting_pipeline(body: &'static str) -> SessionPipeline<CountingTransport> {
        SessionPipeline::new(
            png_source(1600, 1200),
            ImageExtractor::default(),
            AnalysisClient::with_transport(
                "http://localhost/analyze",
                CountingTransport {
                    calls: AtomicUsize::new(0),
                    body,
                },
            ),
        )
    }

    #[test]
    fn run_extracts_and_analyzes_selection() {
        let pipeline = counting_pipeline(r#"{"colors":{"red":{"percent":100,"swatch":"rgb(200,40,40)"}}}"#);
        let result = pipeline
            .run(SessionRequest {
                selection: ViewportRect::new(100.0, 100.0, 50.0, 50.0),
                layout: full_window_layout(),
            })
            .expect("pipeline succeeds");
        assert_eq!(result.get("red").map(|entry| entry.percent), Some(100.0));
    }

    #[test]
    fn missing_colors_maps_to_empty_result() {
        let pipeline = counting_pipeline(r#"{}"#);
        let err = pipeline
            .run(SessionRequest {
                selection: ViewportRect::new(0.0, 0.0, 50.0, 50.0),
                layout: full_window_layout(),
            })
            .expect_err("no colors");
        assert!(matches!(err, PipelineError::EmptyResult));
        assert_eq!(Notice::from(&err), Notice::ServiceUnavailable);
    }

    #[test]
    fn extraction_failure_skips_the_network() {
        let pipeline = SessionPipeline::new(
            ImageSource::Memory(Arc::from(b"garbage".to_vec())),
            ImageExtractor::default(),
            AnalysisClient::with_transport(
                "http://localhost/analyze",
                CountingTransport {
                    calls: AtomicUsize::new(0),
                    body: "{}",
                },
            ),
        );
        let err = pipeline
            .run(SessionRequest {
                selection: ViewportRect::new(0.0, 0.0, 50.0, 50.0),
                layout: full_window_layout(),
            })
            .expect_err("garbage source");

        assert!(matches!(err, PipelineError::Extraction(_)));
        assert_eq!(Notice::from(&err), Notice::ExtractionFailed);
        assert_eq!(pipeline.client.transport().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn selection_outside_rendered_image_is_an_extraction_failure() {
        let natural = Size::new(200.0, 100.0);
        let viewport = Size::new(800.0, 600.0);
        let pipeline = counting_pipeline("{}");
        let err = pipeline
            .run(SessionRequest {
                selection: ViewportRect::new(0.0, 0.0, 50.0, 50.0),
                layout: ImageLayout {
                    viewport,
                    rendered: fit_within(natural, viewport),
                    natural,
                },
            })
            .expect_err("letterbox only");
        assert!(matches!(err, PipelineError::Extraction(ExtractError::EmptyRegion { .. })));
    }

    #[test]
    fn too_small_selection_is_reported_and_dropped() {
        let notifier = RecordingNotifier::default();
        let too_small = Err(SelectionError::TooSmall {
            width: 4.0,
            height: 100.0,
            minimum: MIN_SELECTION_SIZE,
        });
        assert!(accept_selection(too_small, &notifier).is_none());
        assert_eq!(*notifier.notices.borrow(), vec![Notice::SelectionTooSmall]);

        let accepted = accept_selection(Ok(ViewportRect::new(0.0, 0.0, 5.0, 5.0)), &notifier);
        assert_eq!(accepted, Some(ViewportRect::new(0.0, 0.0, 5.0, 5.0)));
        assert_eq!(notifier.notices.borrow().len(), 1);
    }

    #[test]
    fn server_error_shows_notice_and_no_panel() {
        let (url, server) = serve_once("500 INTERNAL SERVER ERROR", r#"{"error":"boom"}"#);
        let pipeline = SessionPipeline::new(
            png_source(64, 64),
            ImageExtractor::default(),
            AnalysisClient::http(url),
        );
        let selection = ViewportRect::new(10.0, 10.0, 20.0, 20.0);
        let outcome = pipeline.run(SessionRequest {
            selection,
            layout: ImageLayout {
                viewport: Size::new(64.0, 64.0),
                rendered: RenderedBounds::new(0.0, 0.0, 64.0, 64.0),
                natural: Size::new(64.0, 64.0),
            },
        });
        let _ = server.join();
        assert!(matches!(outcome, Err(PipelineError::Transport(AnalysisError::Status { status: 500, .. }))));

        let mut renderer = ResultRenderer::new(RecordingHost::default());
        let notifier = RecordingNotifier::default();
        deliver_outcome(outcome, selection, &mut renderer, &notifier);

        assert!(!renderer.has_view());
        assert_eq!(*notifier.notices.borrow(), vec![Notice::ServiceUnavailable]);
    }

    #[test]
    fn success_renders_panel_at_selection_origin() {
        let mut renderer = ResultRenderer::new(RecordingHost::default());
        let notifier = RecordingNotifier::default();
        let result = [crate::analysis::ColorEntry::new("red", "rgb(255,0,0)", 100.0)]
            .into_iter()
            .collect();

        deliver_outcome(
            Ok(result),
            ViewportRect::new(30.0, 40.0, 10.0, 10.0),
            &mut renderer,
            &notifier,
        );

        assert!(notifier.notices.borrow().is_empty());
        let live = &renderer.host().live;
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].1.position, ViewportPoint::new(40.0, 50.0));
    }
}

