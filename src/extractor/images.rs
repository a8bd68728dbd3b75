//! Image set and geometry diagram rules.
//!
//! The gallery exposes each picture in two resolutions behind predictable
//! path segments: the primary image swaps `large` for `thickbox`, the
//! thumbnails swap `medium`. Every emitted URL is the site origin plus the
//! page-relative src.

use crate::dom::{self, NodeRef};
use crate::selector;
use crate::text;

/// Extract the image URL list: the primary (normal, zoomed) pair first,
/// then one pair per thumbnail in page order.
pub(crate) fn images(root: &NodeRef, base_url: &str) -> Vec<String> {
    let mut list = Vec::new();

    if let Some(src) = selector::first(root, "#bigpic").and_then(|img| dom::attr(&img, "src")) {
        push_pair(&mut list, base_url, &src, "large");
    }

    if let Some(frame) = selector::first(root, "#thumbs_list_frame") {
        for img in selector::select(&frame, &selector::Descriptor::parse("img")) {
            if let Some(src) = dom::attr(&img, "src") {
                push_pair(&mut list, base_url, &src, "medium");
            }
        }
    }

    list
}

/// Append the (normal, zoomed) pair for one src, substituting the first
/// occurrence of the resolution segment.
fn push_pair(list: &mut Vec<String>, base_url: &str, src: &str, segment: &str) {
    list.push(format!("{base_url}{src}"));
    list.push(format!("{base_url}{}", src.replacen(segment, "thickbox", 1)));
}

/// Geometry diagram URL: the src of the first element under
/// `#geometry_image`, or empty when the page has no diagram.
pub(crate) fn geometry(root: &NodeRef) -> String {
    let Some(holder) = selector::first(root, "#geometry_image") else {
        return String::new();
    };

    dom::element_children(&holder)
        .first()
        .and_then(|img| dom::attr(img, "src"))
        .map(|src| text::clean(&src))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    const BASE: &str = "http://shop.example";

    #[test]
    fn primary_pair_substitutes_large() {
        let doc = dom::parse(r#"<img id="bigpic" src="/img/large/1.jpg">"#);
        let list = images(&dom::root(&doc), BASE);

        assert_eq!(
            list,
            vec![
                "http://shop.example/img/large/1.jpg",
                "http://shop.example/img/thickbox/1.jpg",
            ]
        );
    }

    #[test]
    fn thumbnails_follow_primary_in_page_order() {
        let doc = dom::parse(
            r#"<img id="bigpic" src="/img/large/1.jpg">
               <div id="thumbs_list_frame">
                   <a><img src="/img/medium/2.jpg"></a>
                   <a><img src="/img/medium/3.jpg"></a>
               </div>"#,
        );
        let list = images(&dom::root(&doc), BASE);

        assert_eq!(
            list,
            vec![
                "http://shop.example/img/large/1.jpg",
                "http://shop.example/img/thickbox/1.jpg",
                "http://shop.example/img/medium/2.jpg",
                "http://shop.example/img/thickbox/2.jpg",
                "http://shop.example/img/medium/3.jpg",
                "http://shop.example/img/thickbox/3.jpg",
            ]
        );
    }

    #[test]
    fn thumbnails_alone_still_extract() {
        let doc = dom::parse(
            r#"<div id="thumbs_list_frame"><img src="/img/medium/9.jpg"></div>"#,
        );
        let list = images(&dom::root(&doc), BASE);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], "http://shop.example/img/medium/9.jpg");
    }

    #[test]
    fn only_first_segment_occurrence_is_substituted() {
        let doc = dom::parse(r#"<img id="bigpic" src="/large/large.jpg">"#);
        let list = images(&dom::root(&doc), BASE);
        assert_eq!(list[1], "http://shop.example/thickbox/large.jpg");
    }

    #[test]
    fn no_gallery_means_no_images() {
        let doc = dom::parse("<div><p>text only</p></div>");
        assert!(images(&dom::root(&doc), BASE).is_empty());
    }

    #[test]
    fn geometry_reads_first_child_src() {
        let doc = dom::parse(
            r#"<div id="geometry_image"><img src="/img/geometry/frame.png"></div>"#,
        );
        assert_eq!(geometry(&dom::root(&doc)), "/img/geometry/frame.png");
    }

    #[test]
    fn geometry_tolerates_absence() {
        let doc = dom::parse("<div></div>");
        assert_eq!(geometry(&dom::root(&doc)), "");

        let doc = dom::parse(r#"<div id="geometry_image">no image inside</div>"#);
        assert_eq!(geometry(&dom::root(&doc)), "");
    }
}
