mod common;

use common::{fixture_assets, RecordingMessenger, Sent};
use image::{Rgba, RgbaImage};
use pokerview_bot::markup::{ReplyMarkup, TurnAction};
use pokerview_bot::messenger::ParseMode;
use pokerview_bot::{BotError, PokerBotViewer, TransportError, TurnSummary};
use pokerview_engine::assets::MemoryAssets;
use pokerview_engine::cards::{parse_cards, Card};
use pokerview_engine::compositor::Compositor;
use pokerview_engine::layout::{LayoutKind, EIGHT_SEAT};
use pokerview_engine::table::{PlayerRenderInfo, TableRenderInfo};
use pokerview_engine::RenderError;

fn viewer_with(
    messenger: RecordingMessenger,
    assets: MemoryAssets,
) -> PokerBotViewer<RecordingMessenger, MemoryAssets> {
    PokerBotViewer::new(messenger, assets, Compositor::default(), &EIGHT_SEAT)
}

fn viewer() -> PokerBotViewer<RecordingMessenger, MemoryAssets> {
    viewer_with(RecordingMessenger::new(), fixture_assets())
}

fn single_message(
    viewer: &PokerBotViewer<RecordingMessenger, MemoryAssets>,
) -> pokerview_bot::TextMessage {
    match viewer.messenger().sent().as_slice() {
        [Sent::Message(m)] => m.clone(),
        other => panic!("expected one message, got {other:?}"),
    }
}

#[test]
fn plain_message_is_silent_markdown_without_preview() {
    let viewer = viewer();
    let id = viewer.send_message(42, "*hello*", None).unwrap();
    assert_eq!(id, 100);

    let msg = single_message(&viewer);
    assert_eq!(msg.chat_id, 42);
    assert_eq!(msg.parse_mode, ParseMode::Markdown);
    assert!(msg.disable_notification);
    assert!(msg.disable_web_page_preview);
}

#[test]
fn reply_targets_original_message() {
    let viewer = viewer();
    viewer.send_message_reply(42, 7, "ok").unwrap();
    let msg = single_message(&viewer);
    assert_eq!(msg.reply_to, Some(7));
    assert_eq!(msg.text, "ok");
}

#[test]
fn dice_reply_defaults_to_die_emoji() {
    let viewer = viewer();
    viewer.send_dice_reply(42, 9, None).unwrap();
    viewer.send_dice_reply(42, 9, Some("🎯")).unwrap();
    let sent = viewer.messenger().sent();
    match (&sent[0], &sent[1]) {
        (Sent::Dice(a), Sent::Dice(b)) => {
            assert_eq!(a.emoji, "🎲");
            assert_eq!(b.emoji, "🎯");
            assert_eq!(a.reply_to, Some(9));
            assert!(a.disable_notification);
        }
        other => panic!("unexpected deliveries {other:?}"),
    }
}

#[test]
fn cards_are_shown_as_selective_keyboard() {
    let viewer = viewer();
    let cards = parse_cards("As Kd").unwrap();
    viewer.send_cards(42, &cards, "@bob", 55).unwrap();

    let msg = single_message(&viewer);
    assert_eq!(msg.text, "Showing cards to @bob");
    assert_eq!(msg.reply_to, Some(55));
    match msg.reply_markup {
        Some(ReplyMarkup::Reply(kb)) => {
            assert_eq!(kb.keyboard, vec![vec!["A♠".to_string(), "K♦".to_string()]]);
            assert!(kb.selective);
        }
        other => panic!("expected reply keyboard, got {other:?}"),
    }
}

#[test]
fn turn_actions_offer_check_when_even() {
    let viewer = viewer();
    let turn = TurnSummary {
        mention: "@carol".into(),
        board: parse_cards("2c 3d 4h").unwrap(),
        money: 250,
        pot: 60,
        in_pot: 20,
        round_rate: 20,
        max_round_rate: 20,
    };
    viewer.send_turn_actions(42, &turn).unwrap();

    let msg = single_message(&viewer);
    assert!(msg.text.starts_with("Turn of @carol\n2♣ 3♦ 4♥\nMoney: *250$* (25 BB)"));
    match msg.reply_markup {
        Some(ReplyMarkup::Inline(kb)) => {
            assert_eq!(kb.inline_keyboard.len(), 4);
            assert_eq!(kb.inline_keyboard[0][2].text, TurnAction::Check.label());
            assert_eq!(kb.inline_keyboard[3][1].callback_data, "500");
        }
        other => panic!("expected inline keyboard, got {other:?}"),
    }
}

#[test]
fn table_is_posted_as_jpeg() {
    let viewer = viewer();
    let players = vec![
        PlayerRenderInfo::new(
            RgbaImage::from_pixel(80, 80, Rgba([200, 200, 0, 255])),
            "alice",
            500,
            0,
        )
        .with_current_turn(true),
    ];
    let table = TableRenderInfo::new(LayoutKind::Eight.layout(), players).unwrap();

    let id = viewer.show_table_with_players(42, &table).unwrap();
    assert_eq!(id, 100);
    match viewer.messenger().sent().as_slice() {
        [Sent::Photo(photo)] => {
            assert_eq!(photo.file_name, "table.jpeg");
            assert_eq!(&photo.bytes[..3], &[0xFF, 0xD8, 0xFF]);
            assert!(photo.disable_notification);
        }
        other => panic!("expected one photo, got {other:?}"),
    }
}

#[test]
fn render_failure_sends_nothing() {
    let viewer = viewer_with(RecordingMessenger::new(), fixture_assets().without_background());
    let players = vec![PlayerRenderInfo::new(RgbaImage::new(80, 80), "alice", 500, 0)];
    let table = TableRenderInfo::new(LayoutKind::Eight.layout(), players).unwrap();

    let err = viewer.show_table_with_players(42, &table).unwrap_err();
    assert!(matches!(err, BotError::Render(RenderError::Asset(_))));
    assert!(viewer.messenger().sent().is_empty());
}

#[test]
fn desk_goes_out_as_png_media_group() {
    let ace: Card = "As".parse().unwrap();
    let assets =
        fixture_assets().with_card_face(ace, RgbaImage::from_pixel(40, 52, Rgba([255; 4])));
    let viewer = viewer_with(RecordingMessenger::new(), assets);

    let id = viewer.send_desk_cards_img(42, &[ace], "Flop", true).unwrap();
    assert_eq!(id, 100);
    match viewer.messenger().sent().as_slice() {
        [Sent::MediaGroup(group)] => {
            assert_eq!(group.media.len(), 1);
            assert_eq!(group.media[0].file_name, "desk.png");
            assert_eq!(group.media[0].caption, "Flop");
            assert_eq!(&group.media[0].bytes[..4], &[0x89, b'P', b'N', b'G']);
            assert!(group.disable_notification);
        }
        other => panic!("expected one media group, got {other:?}"),
    }
}

#[test]
fn markup_and_message_removal() {
    let viewer = viewer();
    viewer.remove_markup(42, 3).unwrap();
    viewer.remove_message(42, 4).unwrap();
    assert_eq!(
        viewer.messenger().sent(),
        vec![Sent::EditMarkup(42, 3, None), Sent::Delete(42, 4)]
    );
}

#[test]
fn transport_failures_surface_as_bot_errors() {
    let viewer = viewer_with(RecordingMessenger::rejecting(), fixture_assets());
    let err = viewer.send_message(42, "hi", None).unwrap_err();
    assert!(matches!(
        err,
        BotError::Transport(TransportError::Rejected { chat_id: 42, .. })
    ));
}
