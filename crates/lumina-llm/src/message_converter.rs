//! Convert transcript messages to chat-completions wire messages.

use base64::Engine as _;
use lumina_core::constants::VISION_PERSONA;
use lumina_core::{ImageRef, Message, VisionRequest};

use crate::types::{ContentPart, ImageUrl, WireContent, WireMessage};

/// Encode bytes as a `data:{mime};base64,...` URL.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime_type};base64,{encoded}")
}

fn image_part(image: &ImageRef) -> ContentPart {
    let url = match image {
        ImageRef::Inline { mime_type, data } => data_url(mime_type, data),
        ImageRef::Hosted { url } => url.clone(),
    };
    ContentPart::ImageUrl {
        image_url: ImageUrl { url },
    }
}

/// Convert one transcript message.
///
/// Messages without an image become plain string content. A message with an
/// image becomes a text part followed by an image part.
pub fn convert_message(message: &Message) -> WireMessage {
    let content = match &message.image {
        None => WireContent::Text(message.content.clone()),
        Some(image) => WireContent::Parts(vec![
            ContentPart::Text {
                text: message.content.clone(),
            },
            image_part(image),
        ]),
    };
    WireMessage {
        role: message.role.as_str(),
        content,
    }
}

/// Convert a full transcript, preserving order and system messages.
pub fn convert_transcript(messages: &[Message]) -> Vec<WireMessage> {
    messages.iter().map(convert_message).collect()
}

/// Build the two-message vision conversation: fixed persona, then the prompt
/// with the image inlined as a data URL.
pub fn build_vision_messages(request: &VisionRequest) -> Vec<WireMessage> {
    vec![
        WireMessage {
            role: "system",
            content: WireContent::Text(VISION_PERSONA.to_string()),
        },
        WireMessage {
            role: "user",
            content: WireContent::Parts(vec![
                ContentPart::Text {
                    text: request.prompt.clone(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: data_url(&request.mime_type, &request.image),
                    },
                },
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use lumina_core::Mode;

    use super::*;

    #[test]
    fn data_url_format() {
        assert_eq!(data_url("image/jpeg", b"hi"), "data:image/jpeg;base64,aGk=");
    }

    #[test]
    fn transcript_keeps_order_and_system() {
        let messages = vec![
            Mode::Chat.seed_message(),
            Message::user("하는 일이 잘 될까요?"),
            Message::assistant("별이 말하길..."),
        ];
        let wire = convert_transcript(&messages);
        assert_eq!(wire.len(), 3);
        assert_eq!(wire[0].role, "system");
        assert_eq!(wire[1].role, "user");
        assert_eq!(
            wire[1].content,
            WireContent::Text("하는 일이 잘 될까요?".into())
        );
        assert_eq!(wire[2].role, "assistant");
    }

    #[test]
    fn hosted_image_uses_url_directly() {
        let msg = Message::assistant("부적")
            .with_image(ImageRef::Hosted { url: "https://img/x.png".into() });
        let wire = convert_message(&msg);
        let WireContent::Parts(parts) = wire.content else {
            panic!("expected parts");
        };
        assert_eq!(
            parts[1],
            ContentPart::ImageUrl {
                image_url: ImageUrl { url: "https://img/x.png".into() }
            }
        );
    }

    #[test]
    fn vision_messages_inline_image_after_persona() {
        let req = VisionRequest {
            image: vec![0xFF, 0xD8],
            mime_type: "image/jpeg".into(),
            prompt: "이 사진을 봐주세요".into(),
        };
        let wire = build_vision_messages(&req);
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].role, "system");
        assert_eq!(wire[0].content, WireContent::Text(VISION_PERSONA.into()));

        let WireContent::Parts(parts) = &wire[1].content else {
            panic!("expected parts");
        };
        assert_eq!(parts[0], ContentPart::Text { text: "이 사진을 봐주세요".into() });
        assert_matches::assert_matches!(
            &parts[1],
            ContentPart::ImageUrl { image_url } if image_url.url == "data:image/jpeg;base64,/9g="
        );
    }
}
