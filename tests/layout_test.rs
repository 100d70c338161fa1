//! Layout-level integration tests: image placement, code block geometry,
//! and content reflow observed through the produced deck.

use markdeck::deck::{Shape, ShapeKind};
use markdeck::layout::geometry::{LEFT_MARGIN, RIGHT_MARGIN};
use markdeck::source::{ImageSource, ResolvedImage};
use markdeck::{
    convert_with_source, Block, ConvertOptions, Deck, Document, Inline, MemorySink, Result,
};

/// Image source that always serves the same bytes.
struct StaticImageSource {
    image: ResolvedImage,
}

impl StaticImageSource {
    fn png(width: u32, height: u32) -> Self {
        let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        data.extend_from_slice(&13u32.to_be_bytes());
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data.extend_from_slice(&[8, 6, 0, 0, 0]);
        Self {
            image: ResolvedImage {
                data,
                content_type: "image/png".into(),
            },
        }
    }
}

impl ImageSource for StaticImageSource {
    fn fetch(&self, _url: &str) -> Result<ResolvedImage> {
        Ok(self.image.clone())
    }
}

fn convert_with_image(blocks: Vec<Block>, source: &StaticImageSource) -> Deck {
    let doc = Document::from_blocks(blocks);
    let mut sink = MemorySink::new();
    convert_with_source(&doc, &mut sink, &ConvertOptions::default(), source).unwrap();
    sink.into_deck().unwrap()
}

fn image_shapes(deck: &Deck) -> Vec<&Shape> {
    deck.slides[0]
        .shapes
        .iter()
        .filter(|s| matches!(s.kind, ShapeKind::Image { .. }))
        .collect()
}

fn content_shape(deck: &Deck) -> Option<&Shape> {
    deck.slides[0].shapes.iter().find(|s| match &s.kind {
        ShapeKind::Text(body) => body.fill.is_none() && !body.paragraphs.is_empty(),
        _ => false,
    })
}

#[test]
fn test_portrait_image_before_content_sits_left() {
    let source = StaticImageSource::png(200, 400);
    let deck = convert_with_image(
        vec![
            Block::paragraph(vec![Inline::image("pic.png", "tall")]),
            Block::text_paragraph("body text"),
        ],
        &source,
    );

    let images = image_shapes(&deck);
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].frame.x, LEFT_MARGIN);

    let content = content_shape(&deck).unwrap();
    assert!(
        content.frame.x >= images[0].frame.right(),
        "content must start right of the portrait image"
    );
}

#[test]
fn test_portrait_image_after_content_sits_right() {
    let source = StaticImageSource::png(200, 400);
    let deck = convert_with_image(
        vec![
            Block::text_paragraph("already here"),
            Block::paragraph(vec![Inline::image("pic.png", "tall")]),
        ],
        &source,
    );

    let images = image_shapes(&deck);
    assert_eq!(images.len(), 1);
    let content = content_shape(&deck).unwrap();
    assert_eq!(content.frame.x, LEFT_MARGIN);
    assert!(
        images[0].frame.x >= content.frame.right(),
        "portrait image must sit right of existing content"
    );
    let slide_width = deck.size.width;
    assert_eq!(images[0].frame.right(), slide_width - RIGHT_MARGIN);
}

#[test]
fn test_landscape_image_below_content() {
    let source = StaticImageSource::png(400, 200);
    let deck = convert_with_image(
        vec![
            Block::text_paragraph("text above"),
            Block::paragraph(vec![Inline::image("pic.png", "wide")]),
        ],
        &source,
    );

    let images = image_shapes(&deck);
    assert_eq!(images.len(), 1);
    let content = content_shape(&deck).unwrap();
    assert!(images[0].frame.y >= content.frame.bottom());
    // Aspect ratio preserved at native size (small image, no upscale)
    assert_eq!(images[0].frame.w, 400 * 9_525);
    assert_eq!(images[0].frame.h, 200 * 9_525);
}

#[test]
fn test_code_block_shape_has_fill_and_line_paragraphs() {
    let doc = Document::from_blocks(vec![Block::code(
        None,
        "first line\nsecond line\n\n",
    )]);
    let deck = markdeck::to_deck(&doc, &ConvertOptions::default()).unwrap();

    let code = deck.slides[0]
        .shapes
        .iter()
        .find_map(|s| match &s.kind {
            ShapeKind::Text(body) if body.fill.is_some() => Some((s, body)),
            _ => None,
        });
    let (_, body) = code.expect("code block shape");
    assert_eq!(body.fill.as_deref(), Some("F5F5F5"));
    assert!(body.insets.is_some());
    // Trailing blank line dropped
    assert_eq!(body.paragraphs.len(), 2);
    assert_eq!(body.paragraphs[0].plain_text(), "first line");
    assert_eq!(body.paragraphs[1].plain_text(), "second line");
    // Tight line spacing on code paragraphs
    assert_eq!(body.paragraphs[0].props.line_spacing, Some(100_000));
}

#[test]
fn test_all_blank_code_block_keeps_one_line_height() {
    let doc = Document::from_blocks(vec![
        Block::code(None, "\n\n"),
        Block::code(None, "x"),
    ]);
    let deck = markdeck::to_deck(&doc, &ConvertOptions::default()).unwrap();

    let code_shapes: Vec<_> = deck.slides[0]
        .shapes
        .iter()
        .filter_map(|s| match &s.kind {
            ShapeKind::Text(body) if body.fill.is_some() => Some((s.frame, body)),
            _ => None,
        })
        .collect();
    assert_eq!(code_shapes.len(), 2);
    // The blank block renders no paragraphs but keeps one line of height.
    assert!(code_shapes[0].1.paragraphs.is_empty());
    assert_eq!(code_shapes[0].0.h, code_shapes[1].0.h);
}

#[test]
fn test_highlighted_code_reconstructs_each_line() {
    let code = "if true; then\n  echo \"hi $USER\"\nfi";
    let doc = Document::from_blocks(vec![Block::code(Some("bash"), code)]);
    let deck = markdeck::to_deck(&doc, &ConvertOptions::default()).unwrap();

    let body = deck.slides[0]
        .shapes
        .iter()
        .find_map(|s| match &s.kind {
            ShapeKind::Text(body) if body.fill.is_some() => Some(body),
            _ => None,
        })
        .unwrap();

    let lines: Vec<&str> = code.lines().collect();
    assert_eq!(body.paragraphs.len(), lines.len());
    for (para, line) in body.paragraphs.iter().zip(&lines) {
        // Token texts concatenate back to the exact line.
        assert_eq!(para.plain_text(), *line);
    }
    // A multi-word line splits into multiple classified runs.
    assert!(body.paragraphs[0].runs().count() > 1);
}

#[test]
fn test_unknown_language_single_run_per_line() {
    let doc = Document::from_blocks(vec![Block::code(Some("cobol"), "MOVE A TO B\nADD 1 TO X")]);
    let deck = markdeck::to_deck(&doc, &ConvertOptions::default()).unwrap();

    let body = deck.slides[0]
        .shapes
        .iter()
        .find_map(|s| match &s.kind {
            ShapeKind::Text(body) if body.fill.is_some() => Some(body),
            _ => None,
        })
        .unwrap();
    for para in &body.paragraphs {
        assert_eq!(para.runs().count(), 1);
    }
}

#[test]
fn test_highlighting_disabled_single_run_per_line() {
    let options = ConvertOptions::new().with_syntax_highlighting(false);
    let doc = Document::from_blocks(vec![Block::code(Some("bash"), "echo hi")]);
    let deck = markdeck::to_deck(&doc, &options).unwrap();

    let body = deck.slides[0]
        .shapes
        .iter()
        .find_map(|s| match &s.kind {
            ShapeKind::Text(body) if body.fill.is_some() => Some(body),
            _ => None,
        })
        .unwrap();
    assert_eq!(body.paragraphs[0].runs().count(), 1);
    assert_eq!(body.paragraphs[0].plain_text(), "echo hi");
}

#[test]
fn test_local_image_resolved_against_base_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    png.extend_from_slice(&13u32.to_be_bytes());
    png.extend_from_slice(b"IHDR");
    png.extend_from_slice(&300u32.to_be_bytes());
    png.extend_from_slice(&100u32.to_be_bytes());
    png.extend_from_slice(&[8, 6, 0, 0, 0]);
    std::fs::write(dir.path().join("chart.png"), &png).unwrap();

    let options = ConvertOptions::new().with_base_path(dir.path());
    let doc = Document::from_blocks(vec![Block::paragraph(vec![Inline::image(
        "chart.png",
        "a chart",
    )])]);
    let deck = markdeck::to_deck(&doc, &options).unwrap();

    let images: Vec<_> = deck.slides[0]
        .shapes
        .iter()
        .filter(|s| matches!(s.kind, ShapeKind::Image { .. }))
        .collect();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].frame.w, 300 * 9_525);
}
