use super::{wrap_block, LayoutContext, PlacedElement, Slide, SlideKind, WrappedLine};
use crate::error::{LayoutWarning, SlidesError};
use crate::font::FontMetrics;
use crate::passage::{ContentBlock, Passage};
use crate::units::Pt;
use log::debug;
use rayon::prelude::*;

/// Slack allowed when comparing accumulated heights against capacity
const EPSILON: f32 = 1e-3;

/// The slides produced for one passage
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub reference: String,
    /// The title slide first, then the body slides in reading order
    pub slides: Vec<Slide>,
    pub warnings: Vec<LayoutWarning>,
}

/// The body of a passage as a stream of things to place
#[derive(Debug, Clone, PartialEq)]
enum FlowItem {
    Heading { text: String, height: Pt },
    Line(WrappedLine),
}

impl FlowItem {
    fn height(&self) -> Pt {
        match self {
            FlowItem::Heading { height, .. } => *height,
            FlowItem::Line(line) => line.height,
        }
    }

    fn text(&self) -> &str {
        match self {
            FlowItem::Heading { text, .. } => text,
            FlowItem::Line(line) => &line.text,
        }
    }
}

struct Flow {
    /// A heading that opens the passage; it's shown on the title slide instead
    subheading: Option<String>,
    items: Vec<FlowItem>,
}

fn build_flow(
    passage: &Passage,
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
    warnings: &mut Vec<LayoutWarning>,
) -> Result<Flow, SlidesError> {
    let mut blocks = passage
        .blocks
        .iter()
        .filter(|block| ctx.include_headings || !block.is_heading())
        .peekable();

    if blocks.peek().is_none() {
        return Err(SlidesError::EmptyPassage {
            reference: passage.reference.clone(),
        });
    }

    let subheading = match blocks.peek() {
        Some(ContentBlock::Heading { text }) => {
            let text = text.clone();
            blocks.next();
            Some(text)
        }
        _ => None,
    };

    let mut items = Vec::new();
    for block in blocks {
        match block {
            ContentBlock::Heading { text } => items.push(FlowItem::Heading {
                text: text.clone(),
                height: ctx.heading_height(metrics)?,
            }),
            _ => items.extend(
                wrap_block(block, ctx, metrics, warnings)?
                    .into_iter()
                    .map(FlowItem::Line),
            ),
        }
    }

    Ok(Flow { subheading, items })
}

/// The slide currently being filled
struct LayoutState {
    elements: Vec<PlacedElement>,
    capacity: Pt,
    /// How far down the content box has been filled
    cursor: Pt,
}

impl LayoutState {
    fn new(capacity: Pt) -> LayoutState {
        LayoutState {
            elements: Vec::new(),
            capacity,
            cursor: Pt(0.0),
        }
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn fits(&self, height: Pt) -> bool {
        height.0 <= (self.capacity - self.cursor).0 + EPSILON
    }

    /// Vertical space a heading takes here, including the gap above it
    fn heading_cost(&self, height: Pt, gap: Pt) -> Pt {
        if self.is_empty() {
            height
        } else {
            gap + height
        }
    }

    fn place(mut self, item: FlowItem, gap: Pt) -> LayoutState {
        match item {
            FlowItem::Heading { text, height } => {
                if !self.is_empty() {
                    self.cursor += gap;
                }
                self.elements.push(PlacedElement::Heading {
                    text,
                    top: self.cursor,
                });
                self.cursor += height;
            }
            FlowItem::Line(line) => {
                let height = line.height;
                self.elements.push(PlacedElement::Line {
                    line,
                    top: self.cursor,
                });
                self.cursor += height;
            }
        }
        self
    }

    fn flush(self, slides: &mut Vec<Slide>, footer: &str) -> LayoutState {
        let capacity = self.capacity;
        if !self.elements.is_empty() {
            slides.push(Slide {
                kind: SlideKind::Body,
                elements: self.elements,
                footer: footer.to_string(),
            });
        }
        LayoutState::new(capacity)
    }
}

/// Space needed to place the headings starting at `items[0]` together with the
/// first line that follows them
fn keep_with_next(items: &[FlowItem], state: &LayoutState, gap: Pt) -> Pt {
    let mut needed = Pt(0.0);
    let mut empty = state.is_empty();
    for item in items {
        match item {
            FlowItem::Heading { height, .. } => {
                needed += if empty { *height } else { gap + *height };
                empty = false;
            }
            FlowItem::Line(line) => {
                needed += line.height;
                break;
            }
        }
    }
    needed
}

fn title_slide(reference: &str, subheading: Option<String>, ctx: &LayoutContext) -> Slide {
    let title_height = ctx.scale.title_line_height();
    let block_height = match subheading {
        Some(_) => title_height + ctx.scale.heading_line_height(),
        None => title_height,
    };
    let top = (ctx.canvas.content_height() - block_height) / 2.0;

    let mut elements = vec![PlacedElement::Title {
        text: reference.to_string(),
        top,
    }];
    if let Some(text) = subheading {
        elements.push(PlacedElement::Subheading {
            text,
            top: top + title_height,
        });
    }

    Slide {
        kind: SlideKind::Title,
        elements,
        footer: ctx.attribution.clone(),
    }
}

/// Lay out one passage: a title slide followed by as many body slides as its
/// text needs. Headings are never left at the bottom of a slide when a line
/// follows them.
pub fn paginate(
    passage: &Passage,
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
) -> Result<Pagination, SlidesError> {
    let mut warnings = Vec::new();
    let flow = build_flow(passage, ctx, metrics, &mut warnings)?;

    let gap = ctx.line_height(metrics)?;
    let capacity = ctx.canvas.content_height();
    let footer = ctx.body_footer(&passage.reference);

    let mut slides = vec![title_slide(&passage.reference, flow.subheading, ctx)];
    let mut state = LayoutState::new(capacity);

    for (i, item) in flow.items.iter().enumerate() {
        if item.height().0 > capacity.0 + EPSILON {
            debug!(
                "{}: `{}` is taller than a slide, placing it alone",
                passage.reference,
                item.text()
            );
            warnings.push(LayoutWarning::OversizedElement {
                text: item.text().to_string(),
                height: item.height(),
                capacity,
            });
            state = state
                .flush(&mut slides, &footer)
                .place(item.clone(), gap)
                .flush(&mut slides, &footer);
            continue;
        }

        let needed = match item {
            FlowItem::Heading { .. } => keep_with_next(&flow.items[i..], &state, gap),
            FlowItem::Line(line) => line.height,
        };
        if !state.is_empty() && !state.fits(needed) {
            debug!(
                "{}: slide {} is full before `{}`",
                passage.reference,
                slides.len() + 1,
                item.text()
            );
            state = state.flush(&mut slides, &footer);
        }
        if let FlowItem::Heading { height, .. } = item {
            debug!(
                "{}: heading `{}` takes {} of {} remaining",
                passage.reference,
                item.text(),
                state.heading_cost(*height, gap),
                state.capacity - state.cursor
            );
        }
        state = state.place(item.clone(), gap);
    }
    state.flush(&mut slides, &footer);

    Ok(Pagination {
        reference: passage.reference.clone(),
        slides,
        warnings,
    })
}

/// Lay out several independent passages in parallel. Results are returned in
/// the order the passages were given.
pub fn paginate_all(
    passages: &[Passage],
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
) -> Vec<Result<Pagination, SlidesError>> {
    passages
        .par_iter()
        .map(|passage| paginate(passage, ctx, metrics))
        .collect()
}
