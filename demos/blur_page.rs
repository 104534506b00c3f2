//! Walkthrough: drive a blur session over an in-memory page.
//!
//! Run with: cargo run --example blur_page

use anyhow::Result;

use region_blur::{BlurSession, MemoryPage, Mode, PageDom, Point, Rect};

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug to watch every state mutation)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ========================================================================
    // Step 1: Build a page
    // ========================================================================
    println!("=== Step 1: Build a page ===");

    let page = MemoryPage::new();
    let headline = page.insert("h1", Rect::new(20.0, 10.0, 300.0, 40.0));
    let photo = page.insert("img", Rect::new(20.0, 60.0, 200.0, 150.0));
    let caption = page.insert("p", Rect::new(20.0, 220.0, 200.0, 30.0));
    let sidebar = page.insert("div", Rect::new(400.0, 10.0, 200.0, 400.0));
    println!("Page has {} elements", page.elements().len());

    // ========================================================================
    // Step 2: Enter edit mode and drag over the photo + caption
    // ========================================================================
    println!("\n=== Step 2: Drag-select the photo and caption ===");

    let session = BlurSession::new(page.clone());
    session.set_mode(Mode::Edit);

    session.pointer_down(Point::new(10.0, 50.0));
    session.pointer_move(Point::new(250.0, 260.0));
    println!("Previewing {} elements", session.highlighted_len());
    session.pointer_up(Point::new(250.0, 260.0));

    for (name, id) in [("headline", headline), ("photo", photo), ("caption", caption), ("sidebar", sidebar)] {
        println!(
            "{name}: blurred={} filter={:?}",
            session.is_blurred(id),
            page.style(id, "filter"),
        );
    }

    // ========================================================================
    // Step 3: Click-toggle the headline
    // ========================================================================
    println!("\n=== Step 3: Click the headline ===");

    session.click(headline);
    println!("headline blurred: {}", session.is_blurred(headline));

    // ========================================================================
    // Step 4: Mode off restores the page exactly
    // ========================================================================
    println!("\n=== Step 4: Switch off ===");

    session.set_mode(Mode::Off);
    println!(
        "blurred elements: {}, photo filter: {:?}",
        session.blurred_len(),
        page.style(photo, "filter"),
    );

    Ok(())
}
