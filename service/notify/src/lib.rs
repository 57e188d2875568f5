mod drive;
mod mail;
mod template;

#[rustfmt::skip]
pub use {
    drive::{AccessToken, AccessTokenFetcher, ClientCredentialsFetcher, GraphDriveService, GraphTokenCache},
    mail::{LogMailSender, MailServiceImpl},
    template::template_registry,
};
