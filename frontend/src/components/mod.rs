pub mod album_grid;
pub mod album_upload;
pub mod button;
pub mod card;
pub mod empty;
pub mod header;
pub mod input;
pub mod leave_request_form;
pub mod medicine_request_form;
pub mod messages_panel;
pub mod modal;
pub mod notification_list;
pub mod parent_app;
pub mod parent_home;
pub mod pending_requests;
pub mod qr_modal;
pub mod tab_bar;
pub mod teacher_app;
