// SPDX-License-Identifier: MPL-2.0
//! View rendering for every window.
//!
//! The daemon asks for one view per window; the surface recorded for that
//! window decides what is drawn.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::notify::popup::Popup;
use crate::notify::toast::Toast;
use crate::notify::Surface;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, column, container, mouse_area, row, text, Column, Container};
use iced::{window, Alignment, Element, Font, Length};

/// Context required to render one window.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window: window::Id,
    pub surface: Option<&'a Surface>,
    pub dialog_open: bool,
    pub tray_supported: bool,
    pub config_warning: Option<&'a str>,
}

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.surface {
        Some(Surface::Main) => view_main(&ctx),
        Some(Surface::Toast(toast)) => view_toast(ctx.i18n, toast),
        Some(Surface::Popup(popup)) => view_popup(ctx.i18n, ctx.window, popup),
        Some(Surface::Banner(_)) => view_banner(ctx.i18n, ctx.window),
        // A window the registry already forgot, drawn until the platform closes it
        None => column![].into(),
    }
}

fn trigger<'a>(label: String, message: Option<Message>) -> Element<'a, Message> {
    button(text(label).size(typography::BODY_LG))
        .on_press_maybe(message)
        .style(styles::button::trigger)
        .height(sizing::BUTTON_HEIGHT)
        .width(Length::Fill)
        .into()
}

fn view_main<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    // A modal message box blocks every trigger until it is dismissed
    let enabled = |message: Message| (!ctx.dialog_open).then_some(message);

    let tray = if ctx.tray_supported {
        trigger(i18n.tr("button-tray"), enabled(Message::ShowTray))
    } else {
        trigger(i18n.tr("button-tray-unavailable"), None)
    };

    let mut content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(trigger(i18n.tr("button-dialog"), enabled(Message::ShowDialog)))
        .push(trigger(i18n.tr("button-toast"), enabled(Message::ShowToast)))
        .push(tray)
        .push(trigger(i18n.tr("button-popup"), enabled(Message::ShowPopup)))
        .push(trigger(i18n.tr("button-banner"), enabled(Message::ShowBanner)));

    if let Some(key) = ctx.config_warning {
        content = content.push(
            text(i18n.tr(key))
                .size(typography::BODY)
                .color(palette::ERROR_500),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::main_panel)
        .into()
}

fn view_toast<'a>(i18n: &I18n, toast: &Toast) -> Element<'a, Message> {
    container(
        text(i18n.tr(toast.message_key()))
            .size(typography::BODY)
            .font(BOLD),
    )
    .center(Length::Fill)
    .style(styles::container::toast)
    .into()
}

fn view_popup<'a>(i18n: &I18n, id: window::Id, popup: &Popup) -> Element<'a, Message> {
    let content = column![
        text(i18n.tr(popup.title_key()))
            .size(typography::TITLE_SM)
            .font(BOLD),
        text(i18n.tr(popup.message_key())).size(typography::BODY),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    // The whole window is the click target
    mouse_area(
        container(content)
            .center(Length::Fill)
            .style(styles::container::popup),
    )
    .on_press(Message::PopupClicked(id))
    .into()
}

fn view_banner<'a>(i18n: &I18n, id: window::Id) -> Element<'a, Message> {
    let close = button(
        text(i18n.tr("banner-close"))
            .size(typography::GLYPH)
            .center(),
    )
    .on_press(Message::BannerClosePressed(id))
    .width(sizing::CLOSE_BUTTON)
    .height(sizing::CLOSE_BUTTON)
    .padding(0)
    .style(styles::button::banner_close);

    let content = row![
        text(i18n.tr("banner-message"))
            .size(typography::BODY_LG)
            .font(BOLD)
            .width(Length::Fill),
        close,
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    container(content)
        .padding([0.0, spacing::SM])
        .center_y(Length::Fill)
        .width(Length::Fill)
        .style(styles::container::banner)
        .into()
}
