use std::fs;
use std::path::PathBuf;
use std::process::Command;

use proposal_docs::documents::{memo, script};
use proposal_docs::render::{DocumentRenderer, Layout, Placement};
use proposal_docs::{generate, render_document, write_document, DocumentKind, RenderError};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("proposal-docs-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

fn layout_of(kind: DocumentKind) -> Layout {
    let doc = kind.build().expect("Failed to build document");
    DocumentRenderer::new(&doc)
        .layout()
        .expect("Failed to lay out document")
}

/// Index of the first text run equal to `needle`
fn position(texts: &[&str], needle: &str) -> usize {
    texts
        .iter()
        .position(|t| *t == needle)
        .unwrap_or_else(|| panic!("{:?} not found", needle))
}

#[test]
fn test_all_documents_are_well_formed_pdfs() {
    for kind in DocumentKind::ALL {
        let doc = kind.build().unwrap();
        let bytes = render_document(&doc).expect("Failed to render PDF");

        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"), "{} lacks PDF header", kind);

        let tail = &bytes[bytes.len().saturating_sub(32)..];
        assert!(
            tail.windows(5).any(|w| w == b"%%EOF"),
            "{} lacks EOF marker",
            kind
        );

        let parsed = lopdf::Document::load_mem(&bytes).expect("Output should parse");
        let expected_pages = layout_of(kind).page_count();
        assert_eq!(parsed.get_pages().len(), expected_pages);
    }
}

#[test]
fn test_output_is_deterministic() {
    for kind in DocumentKind::ALL {
        let first = render_document(&kind.build().unwrap()).unwrap();
        let second = render_document(&kind.build().unwrap()).unwrap();
        assert!(first == second, "{} differs between runs", kind);
    }
}

#[test]
fn test_memo_structure() {
    let layout = layout_of(DocumentKind::Memo);
    assert_eq!(layout.page_count(), 1);

    let page = &layout.pages[0];
    let texts: Vec<&str> = page.texts().collect();

    // Title first and centered on the page
    match &page.placements[0] {
        Placement::Text { text, x, width, .. } => {
            assert_eq!(text, "MEMORANDUM");
            assert!((x + width / 2.0 - layout.page_width / 2.0).abs() < 0.01);
        }
        other => panic!("expected title text, got {:?}", other),
    }

    let labels: Vec<usize> = ["TO:", "FROM:", "DATE:", "RE:"]
        .iter()
        .map(|l| position(&texts, l))
        .collect();
    assert!(labels.windows(2).all(|w| w[0] < w[1]));

    let sections: Vec<usize> = memo::SECTIONS
        .iter()
        .map(|s| position(&texts, s))
        .collect();
    assert!(sections.windows(2).all(|w| w[0] < w[1]));
    assert!(labels[3] < sections[0]);

    // Exactly two numbered pilot items between The Ask and Why Now
    let ask = position(&texts, "The Ask.");
    let why_now = position(&texts, "Why Now.");
    let numbered: Vec<&str> = texts[ask..why_now]
        .iter()
        .copied()
        .filter(|t| *t == "1." || *t == "2.")
        .collect();
    assert_eq!(numbered, vec!["1.", "2."]);
    assert!(!texts.iter().any(|t| *t == "3."));
}

#[test]
fn test_video_script_is_multi_page_with_trailing_notes() {
    let layout = layout_of(DocumentKind::VideoScript);
    assert!(layout.page_count() > 1);

    let notes_page = layout
        .pages
        .iter()
        .position(|p| p.contains_text(script::PRODUCTION_NOTES))
        .expect("Production notes missing");
    let closing_page = layout
        .pages
        .iter()
        .position(|p| p.contains_text("SECTION 7: CLOSING"))
        .expect("Closing section missing");
    assert!(notes_page >= closing_page);

    // Nothing lands below the automatic break bound
    let bound = layout.page_height - 20.0;
    for page in &layout.pages {
        for p in &page.placements {
            assert!(p.bottom() <= bound + 1e-3, "placement below bound: {:?}", p);
        }
    }
}

#[test]
fn test_one_pager_has_footer_banner() {
    let layout = layout_of(DocumentKind::BenefitsOnePager);
    assert_eq!(layout.page_count(), 1);

    let page = &layout.pages[0];
    let banner = page
        .placements
        .iter()
        .find(|p| matches!(p, Placement::Rect { .. }))
        .expect("Footer bar missing");
    assert_eq!(banner.bottom(), 290.0);
    assert!(page.contains_text("Prepared by Stringz Technologies LLC"));
}

#[test]
fn test_write_into_missing_directory_fails_with_io() {
    let missing = scratch_dir("missing").join("does-not-exist");
    let doc = DocumentKind::Memo.build().unwrap();

    let err = write_document(&doc, &missing.join("governor-memo.pdf")).unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
}

#[test]
fn test_generate_writes_named_file() {
    let dir = scratch_dir("generate");
    let (path, size) = generate(DocumentKind::BenefitsOnePager, &dir).unwrap();

    assert_eq!(path, dir.join("benefits-one-pager.pdf"));
    assert_eq!(fs::metadata(&path).unwrap().len() as usize, size);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_generates_all_three_files() {
    let dir = scratch_dir("cli");
    let output = Command::new(env!("CARGO_BIN_EXE_proposal-docs"))
        .args(["-o", dir.to_str().unwrap()])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success(), "CLI failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    for kind in DocumentKind::ALL {
        assert!(dir.join(kind.file_name()).exists());
        assert!(stdout.contains(&format!("[OK] {}", kind.file_name())));
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_fails_on_missing_output_directory() {
    let dir = scratch_dir("cli-missing").join("nope");
    let output = Command::new(env!("CARGO_BIN_EXE_proposal-docs"))
        .args(["-o", dir.to_str().unwrap()])
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert!(!dir.exists());
}
