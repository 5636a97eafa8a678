//! Indented plain-text rendering of cards and pages.

use std::fmt::Write;

use folio_media::Gallery;
use folio_render::{Block, Card, DetailPage};

pub(crate) fn cards(cards: &[Card]) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let headline = match card.status {
            Some(status) => format!("{} [{status}]", card.title),
            None => card.title.clone(),
        };
        line(&mut out, 0, &headline);
        line(&mut out, 1, &card.subtitle);
        line(&mut out, 1, &card.detail_href);
        for block in &card.blocks {
            write_block(&mut out, block);
        }
    }
    out.trim_end().to_string()
}

pub(crate) fn page(page: &DetailPage) -> String {
    let mut out = String::new();
    match page {
        DetailPage::Found {
            title,
            subtitle,
            blocks,
            back,
            ..
        } => {
            line(&mut out, 0, title);
            line(&mut out, 1, subtitle);
            for block in blocks {
                write_block(&mut out, block);
            }
            line(&mut out, 0, &format!("<- {} ({})", back.label, back.href));
        }
        DetailPage::NotFound {
            title,
            message,
            back,
        } => {
            line(&mut out, 0, title);
            line(&mut out, 1, message);
            line(&mut out, 0, &format!("<- {} ({})", back.label, back.href));
        }
    }
    out.trim_end().to_string()
}

fn write_block(out: &mut String, block: &Block) {
    let heading = block.heading().unwrap_or(block.name());
    match block {
        Block::Tags { items } => line(out, 1, &format!("tags: {}", items.join(", "))),
        Block::Hero { image } => line(out, 1, &format!("hero: {}", image.src)),
        Block::Video { embed } => line(out, 1, &format!("{heading}: {}", embed.src)),
        Block::Problem { text } => {
            line(out, 1, &format!("{heading}:"));
            line(out, 2, text.trim());
        }
        Block::Gallery { gallery } => {
            line(out, 1, &format!("{heading}:"));
            match gallery {
                Gallery::Grid { images } => {
                    for image in images {
                        line(out, 2, &format!("- {}", image.src));
                    }
                }
                Gallery::Carousel { label, slides, controller } => {
                    line(out, 2, &format!("{label} ({} slides)", slides.len()));
                    for (i, slide) in slides.iter().enumerate() {
                        let marker = if Some(i) == controller.index() { '*' } else { '-' };
                        line(out, 2, &format!("{marker} {}", slide.src));
                    }
                }
            }
        }
        Block::Links { links } => {
            line(out, 1, &format!("{heading}:"));
            for link in links {
                line(out, 2, &format!("- {}: {}", link.label, link.href));
            }
        }
        Block::Highlights { items }
        | Block::Approach { items }
        | Block::Results { items }
        | Block::WhatILearned { items }
        | Block::ProblemsEncountered { items }
        | Block::FutureWork { items } => {
            line(out, 1, &format!("{heading}:"));
            for item in items {
                line(out, 2, &format!("- {item}"));
            }
        }
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    if text.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}{text}", "  ".repeat(depth));
}
