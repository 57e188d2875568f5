mod content;
mod notify;
mod support;
