#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardSize {
    pub width: i32,
    pub height: i32,
}

impl CardSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Applies a drag delta. Not clamped, so a card can shrink past zero.
    pub fn grow(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            width: self.width + dx,
            height: self.height + dy,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardRecord {
    pub id: u32,
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub content: String,
}

impl CardRecord {
    pub fn new(id: u32, size: CardSize, title: String, content: String) -> Self {
        Self {
            id,
            width: size.width,
            height: size.height,
            title,
            content,
        }
    }

    pub fn size(&self) -> CardSize {
        CardSize::new(self.width, self.height)
    }

    pub fn resized(&self, size: CardSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self.clone()
        }
    }
}
