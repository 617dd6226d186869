use ratatui::layout::Rect;
use ratatui::widgets::Block;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Block framing the counter inside the body region.
pub fn body_block() -> Block<'static> {
    Block::bordered().title(" Counter ")
}

/// Area the counter view is drawn into. Rendering and mouse hit-testing
/// both go through here so they agree on button positions.
pub fn counter_rect(area: Rect) -> Rect {
    body_block().inner(layout_regions(area).1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_vertically() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(body, Rect::new(0, 3, 80, 18));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn tiny_area_gives_empty_body() {
        let (_, body, _) = layout_regions(Rect::new(0, 0, 80, 4));
        assert_eq!(body.height, 0);
    }

    #[test]
    fn counter_rect_is_inside_body_border() {
        let rect = counter_rect(Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(1, 4, 78, 16));
    }
}
