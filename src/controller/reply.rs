// src/controller/reply.rs

pub const DISCLAIMER: &str = "⚠️ Note: I’m an AI support tool, not a professional. \
If you ever feel in danger or deeply hopeless, please talk to a trusted \
adult, friend, or mental health professional.";

/// The pieces of one turn's answer, before rendering.
#[derive(Debug, Clone)]
pub struct Reply {
    pub mood: String,
    pub coping: String,
    pub motivation: String,
    pub trend: Vec<String>,
}

impl Reply {
    /// Trend line, shown only once there is more than one mood to compare.
    pub fn trend_line(&self) -> Option<String> {
        if self.trend.len() > 1 {
            Some(format!(
                "📈 Recent mood trend (last {} messages): {}",
                self.trend.len(),
                self.trend.join(", ")
            ))
        } else {
            None
        }
    }

    pub fn render(&self) -> String {
        let trend = self
            .trend_line()
            .map(|line| format!("\n\n{line}"))
            .unwrap_or_default();

        format!(
            "🧠 I sense you might be feeling **{mood}** right now.\n\n\
             Here are some gentle suggestions you can try:\n\n\
             {coping}\n\n\
             {motivation}{trend}\n\n\
             {DISCLAIMER}",
            mood = self.mood,
            coping = self.coping,
            motivation = self.motivation,
        )
    }
}
