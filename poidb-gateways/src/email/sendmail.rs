use fast_chemail::is_valid_email;
use poidb_core::gateways::email::EmailGateway;
use poidb_entities::email::*;
#[cfg(not(test))]
use std::{
    io::Write as _,
    process::{Command, Stdio},
};
use std::{
    io::{Error, Result},
    thread,
};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

/// Delivers e-mails through the local `sendmail` binary.
///
/// Every e-mail is piped to its own `sendmail -t` process
/// on a background thread.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: EmailAddress,
}

impl Sendmail {
    pub fn new(from: EmailAddress) -> Self {
        Self { from }
    }
}

impl EmailGateway for Sendmail {
    fn compose_and_send(&self, recipients: &[EmailAddress], content: &EmailContent) {
        // One e-mail per administrator, nobody sees the other recipients
        let mails: Vec<_> = recipients
            .iter()
            .filter_map(|to| {
                compose(&self.from, std::slice::from_ref(to), content)
                    .inspect_err(|err| log::warn!("Failed to compose e-mail to {to}: {err}"))
                    .ok()
            })
            .collect();
        log::debug!("Sending {} e-mail(s)", mails.len());
        for mail in mails {
            thread::spawn(move || {
                if let Err(err) = pipe_to_sendmail(&mail) {
                    log::warn!("Could not send e-mail: {err}");
                }
            });
        }
    }
}

#[cfg(not(test))]
fn pipe_to_sendmail(mail: &str) -> Result<()> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    let Some(mut stdin) = child.stdin.take() else {
        return Err(Error::other("sendmail doesn't accept any input"));
    };
    stdin.write_all(mail.as_bytes())?;
    drop(stdin);
    let status = child.wait()?;
    if !status.success() {
        return Err(Error::other(format!("sendmail failed: {status}")));
    }
    Ok(())
}

#[cfg(test)]
fn pipe_to_sendmail(mail: &str) -> Result<()> {
    log::debug!("Not sending e-mail while testing: {mail}");
    Ok(())
}

// Excluding the trailing CRLF. Longer lines would be broken
// by quoted_printable at arbitrary positions.
const MAX_LINE_LEN: usize = 76;

fn encoded_word(text: &str) -> String {
    format!("=?UTF-8?Q?{}?=", quoted_printable::encode_to_str(text))
}

/// Formats a header field whose value may contain arbitrary
/// user input, e.g. the name of an interest point.
///
/// Non-ASCII or long values are split into UTF-8 encoded
/// words, one per line.
fn header_field(name: &str, value: &str) -> String {
    // No line breaks or other control characters may end up in the header
    let value: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let prefix_len = name.len() + 1;
    if value.is_ascii() && prefix_len + value.len() <= MAX_LINE_LEN {
        return format!("{name}:{value}");
    }
    let mut lines = Vec::new();
    let mut available = MAX_LINE_LEN - prefix_len;
    let mut rest = value.as_str();
    while !rest.is_empty() {
        let mut split_at = 0;
        let mut word = String::new();
        for (offset, c) in rest.char_indices() {
            let end = offset + c.len_utf8();
            let candidate = encoded_word(&rest[..end]);
            if candidate.len() > available && split_at > 0 {
                break;
            }
            split_at = end;
            word = candidate;
        }
        lines.push(word);
        rest = &rest[split_at..];
        // continuation lines start with a single space
        available = MAX_LINE_LEN - 1;
    }
    format!("{name}:{}", lines.join("\r\n "))
}

pub fn compose(from: &EmailAddress, to: &[EmailAddress], content: &EmailContent) -> Result<String> {
    let to: Vec<_> = to
        .iter()
        .map(EmailAddress::as_str)
        .filter(|addr| is_valid_email(addr))
        .collect();
    if to.is_empty() {
        return Err(Error::other("No valid recipient"));
    }
    let date = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(&Rfc2822)
        .map_err(Error::other)?;
    let headers = [
        format!("Date:{date}"),
        format!("From:{from}"),
        format!("To:{}", to.join(",")),
        header_field("Subject", &content.subject),
        "MIME-Version:1.0".to_owned(),
        "Content-Type:text/plain;charset=utf-8".to_owned(),
    ];
    Ok(format!("{}\r\n\r\n{}", headers.join("\r\n"), content.body))
}
