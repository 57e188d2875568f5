mod drive;
mod mail;
mod mail_sender;

#[rustfmt::skip]
pub use {
    drive::DriveService,
    mail::MailService,
    mail_sender::MailSender,
};
