use folio_media::resolve_media;
use folio_model::{Entry, Links, Sections};

use crate::block::{Block, LinkItem, LinkKind, LinkTarget, ViewMode};

/// Composes an entry into display blocks.
///
/// Order is fixed: tags, highlights, hero, gallery, video, problem, approach,
/// results, what I learned, problems encountered, future work, links. A block
/// is emitted only when its data is present; list blocks keep their items in
/// declared order. `mode` only affects how many highlights are kept and the
/// wording of link labels.
pub fn render_blocks(entry: &Entry, mode: ViewMode) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Some(tech) = entry.tech() {
        blocks.push(Block::Tags {
            items: tech.to_vec(),
        });
    }
    if let Some(highlights) = entry.highlights() {
        let keep = mode.highlight_limit().unwrap_or(highlights.len());
        blocks.push(Block::Highlights {
            items: highlights.iter().take(keep).cloned().collect(),
        });
    }

    let media = resolve_media(&entry.title, entry.media.as_ref());
    if let Some(image) = media.hero {
        blocks.push(Block::Hero { image });
    }
    if let Some(gallery) = media.gallery {
        blocks.push(Block::Gallery { gallery });
    }
    if let Some(embed) = media.video {
        blocks.push(Block::Video { embed });
    }

    if let Some(sections) = entry.sections.as_ref() {
        push_sections(&mut blocks, sections);
    }

    if let Some(links) = entry.links.as_ref() {
        let links = render_links(links, mode);
        if !links.is_empty() {
            blocks.push(Block::Links { links });
        }
    }

    blocks
}

fn push_sections(blocks: &mut Vec<Block>, sections: &Sections) {
    if let Some(text) = sections.problem() {
        blocks.push(Block::Problem {
            text: text.to_string(),
        });
    }
    if let Some(items) = sections.approach() {
        blocks.push(Block::Approach {
            items: items.to_vec(),
        });
    }
    if let Some(items) = sections.results() {
        blocks.push(Block::Results {
            items: items.to_vec(),
        });
    }
    if let Some(items) = sections.what_i_learned() {
        blocks.push(Block::WhatILearned {
            items: items.to_vec(),
        });
    }
    if let Some(items) = sections.problems_encountered() {
        blocks.push(Block::ProblemsEncountered {
            items: items.to_vec(),
        });
    }
    if let Some(items) = sections.future_work() {
        blocks.push(Block::FutureWork {
            items: items.to_vec(),
        });
    }
}

/// Present links in github, demo, video, report order.
pub fn render_links(links: &Links, mode: ViewMode) -> Vec<LinkItem> {
    [
        (LinkKind::Github, links.github()),
        (LinkKind::Demo, links.demo()),
        (LinkKind::Video, links.video()),
        (LinkKind::Report, links.report()),
    ]
    .into_iter()
    .filter_map(|(kind, href)| {
        href.map(|href| LinkItem {
            kind,
            href: href.to_string(),
            label: kind.label(mode),
            target: LinkTarget::of(href),
        })
    })
    .collect()
}
