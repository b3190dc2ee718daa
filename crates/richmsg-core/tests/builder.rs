//! XmlMessageBuilder / build_xml_message behavior.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use richmsg_core::{build_xml_message, ItemBuilder, RichContent, XmlMessageBuilder};

const HEADER: &str = "<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn default_fields() {
    let b = XmlMessageBuilder::new();
    assert_eq!(b.template_id, 1);
    assert_eq!(b.service_id, 1);
    assert_eq!(b.action, "plugin");
    assert_eq!(b.action_data, "");
    assert_eq!(b.brief, "");
    assert_eq!(b.flag, 3);
    assert_eq!(b.url, "");
    assert_eq!(b.source_name, "");
    assert_eq!(b.source_icon_url, "");
    assert_eq!(b.item_count(), 0);
}

#[test]
fn render_is_idempotent() {
    init_tracing();
    let mut b = XmlMessageBuilder::new();
    b.brief = "brief".into();
    b.item(|i| {
        i.title("t");
    });
    let first = b.render();
    let second = b.render();
    assert_eq!(first, second);
}

#[test]
fn n_items_render_n_blocks_in_order() {
    let mut b = XmlMessageBuilder::new();
    for n in 0..5 {
        b.item(|i| {
            i.summary(&n.to_string());
        });
    }
    let text = b.render();
    assert_eq!(text.matches("<item ").count(), 5);

    let positions: Vec<usize> = (0..5)
        .map(|n| text.find(&format!(">{n}</summary>")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn configure_can_override_item_defaults() {
    let mut b = XmlMessageBuilder::new();
    b.item_with(5, 7, |i| {
        assert_eq!((i.bg, i.layout), (5, 7));
        i.bg = 9;
    });
    assert!(b.render().contains("<item bg='9' layout='7'></item>"));
}

#[test]
fn source_sets_both_fields() {
    let mut b = XmlMessageBuilder::new();
    b.source_with("old", "old.png");
    b.source("name");
    assert_eq!(b.source_name, "name");
    assert_eq!(b.source_icon_url, "");
    b.source_with("other", "icon.png");
    assert!(b.render().ends_with("<source name='other' icon='icon.png'/></msg>"));
}

#[test]
fn item_builder_renders_standalone() {
    let mut i = ItemBuilder::default();
    i.picture("c").title_with("t", 12, "#fff").summary_with("s", "#111");
    assert_eq!(
        i.render(),
        "<item bg='0' layout='4'><picture cover='c'/><title size='12' color='#fff'>t</title><summary color='#111'>s</summary></item>"
    );
}

#[test]
fn built_message_keeps_requested_service_id() {
    init_tracing();
    let msg = build_xml_message(77, |b| {
        b.service_id = 2;
    });
    assert_eq!(msg.service_id(), 77);
    assert!(msg.is_xml());
    assert!(msg
        .content()
        .starts_with(&format!("{HEADER}<msg templateID='1' serviceID='2' ")));
}

#[test]
fn built_message_seeds_builder_defaults() {
    let msg = build_xml_message(5, |b| {
        assert_eq!(b.service_id, 5);
        assert_eq!(b.template_id, 1);
        assert_eq!(b.item_count(), 0);
        b.item(|_| {});
    });
    assert_eq!(
        msg.content(),
        format!(
            "{HEADER}<msg templateID='1' serviceID='5' action='plugin' actionData='' brief='' flag='3' url=''>\
             <item bg='0' layout='4'></item><source name='' icon=''/></msg>"
        )
    );
}

#[test]
fn with_service_id_keeps_other_defaults() {
    let mut b = XmlMessageBuilder::with_service_id(9);
    assert_eq!(b.service_id, 9);
    b.service_id = 1;
    assert_eq!(b, XmlMessageBuilder::new());
}

#[test]
#[allow(deprecated)]
fn default_service_id_variant_matches_explicit_60() {
    let configure = |b: &mut XmlMessageBuilder| {
        b.brief = "x".into();
        b.item(|i| {
            i.title("y");
        });
    };
    let legacy = richmsg_core::build_xml_message_default(configure);
    let explicit = build_xml_message(60, configure);
    assert_eq!(legacy, explicit);
    assert_eq!(legacy.service_id(), 60);
}
