mod notification;

pub use notification::{DeliveryStatus, EmailNotification};
