pub mod dataset_table;
pub mod map_report;

use varaq_idf::{TextNode, TextSpan};
use varaq_layout::normalize_for_display;
use varaq_types::{FontFamilies, FontRole};

/// Builds a display text node by routing the raw string through the
/// bidirectional segmenter.
///
/// Strings that are not displayable (empty or whitespace-only) fall back
/// to an empty LTR node so a blank cell renders as blank. Tokens flagged
/// for the alternate numeral face only get it when one is configured.
pub(crate) fn text_node(raw: &str, bold: bool, fonts: &FontFamilies) -> TextNode {
    let font_size = if bold {
        fonts.sizes.bold
    } else {
        fonts.sizes.regular
    };

    match normalize_for_display(raw) {
        Ok(display) => TextNode {
            direction: display.direction,
            spans: display
                .segments
                .into_iter()
                .map(|segment| TextSpan {
                    font: if segment.uses_alt_font && fonts.alt_numeral.is_some() {
                        FontRole::AltNumeral
                    } else if bold {
                        FontRole::Bold
                    } else {
                        FontRole::Regular
                    },
                    text: segment.text,
                })
                .collect(),
            font_size,
        },
        Err(_) => TextNode::empty(font_size),
    }
}
