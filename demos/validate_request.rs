use http_chars::{check_authority, validate_field_value, validate_token};

fn main() {
    let head = "GET / HTTP/1.1\r\n\
                Host: user@example.com:8080\r\n\
                Accept-Encoding: gzip, deflate\r\n\
                Bad Header: value\r\n\
                X-Trace: ok\x7f\r\n";

    for line in head.split("\r\n").skip(1).filter(|l| !l.is_empty()) {
        let Some((name, value)) = line.split_once(':') else {
            println!("{line:?}: missing colon");
            continue;
        };
        let value = value.trim_matches(' ');

        if let Err(e) = validate_token(name) {
            println!("{line:?}: header name rejected: {e}");
            continue;
        }
        if let Err(e) = validate_field_value(value) {
            println!("{line:?}: header value rejected: {e}");
            continue;
        }
        if name.eq_ignore_ascii_case("host") {
            match check_authority(value.as_bytes()) {
                Ok(parts) => println!(
                    "Host: {} (port {})",
                    String::from_utf8_lossy(parts.host),
                    parts.port.map(String::from_utf8_lossy).unwrap_or_default()
                ),
                Err(e) => println!("{line:?}: host rejected: {e}"),
            }
            continue;
        }
        println!("{name}: {value}");
    }
}
