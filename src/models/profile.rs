#[derive(Debug, Clone)]
pub struct ProfileLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub role: String,
    pub location: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub links: Vec<ProfileLink>,
    pub about: String,
    pub focus: String,
    pub hero_pills: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub title: String,
    pub summary: String,
    pub tools: String,
}

#[derive(Debug, Clone)]
pub struct Skills {
    pub groups: Vec<SkillGroup>,
    pub professional: Vec<String>,
    pub reading_note: String,
}
