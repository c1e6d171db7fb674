//! Custom assertion macros

/// Assert that a bubble view exposes no author-only controls
#[macro_export]
macro_rules! assert_no_author_controls {
    ($view:expr) => {
        let view = &$view;
        assert!(view.menu.is_none(), "menu rendered for non-author: {:?}", view.menu);
        assert!(view.status.is_none(), "status rendered for non-author: {:?}", view.status);
    };
}

/// Assert the status badge of a view
#[macro_export]
macro_rules! assert_badge {
    ($view:expr, None) => {
        assert_eq!($view.status, None);
    };
    ($view:expr, $icon:ident, $emphasis:ident) => {
        assert_eq!(
            $view.status,
            Some(chat_bubble::egui_app::messaging::StatusBadge {
                icon: chat_bubble::egui_app::messaging::StatusIcon::$icon,
                emphasis: chat_bubble::egui_app::messaging::Emphasis::$emphasis,
            })
        );
    };
}
