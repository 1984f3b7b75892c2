//! Fixed benchmark dataset
//!
//! The prompt cases and per-provider model lists are compiled into the binary
//! so every run sends the same requests in the same order.

/// A source text paired with the rewriting instruction applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptCase {
    pub user_message: &'static str,
    pub style_target: &'static str,
}

/// OpenAI models, benchmarked in this order
pub const OPENAI_MODELS: &[&str] = &["gpt-3.5-turbo-0125", "gpt-4-0125-preview"];

/// Anthropic models, benchmarked in this order
pub const ANTHROPIC_MODELS: &[&str] = &[
    "claude-3-haiku-20240307",
    "claude-3-sonnet-20240229",
    "claude-3-opus-20240229",
];

/// Prompt cases, sent to every model in this order
pub const PROMPT_CASES: &[PromptCase] = &[
    PromptCase {
        user_message: "The novel coronavirus, SARS-CoV-2, is a highly virulent pathogen that has caused a global pandemic of COVID-19. The virus is transmitted via respiratory droplets and can cause severe acute respiratory syndrome, leading to high morbidity and mortality rates, particularly among elderly and immunocompromised individuals.",
        style_target: "Style: Simplify, Target: 5th Grader",
    },
    PromptCase {
        user_message: "The project manager was on cloud nine after the successful product launch, but soon realized that the team had bitten off more than they could chew when they encountered numerous bugs and issues.",
        style_target: "Style: Translate, Target: Spanish",
    },
    PromptCase {
        user_message: "The company's quarterly financial report indicated a 5% increase in revenue compared to the previous year. The CEO attributed this growth to the successful implementation of new marketing strategies and the dedication of the sales team.",
        style_target: "Style: Tone, Target: Humorous",
    },
    PromptCase {
        user_message: "To be, or not to be, that is the question. Whether 'tis nobler in the mind to suffer the slings and arrows of outrageous fortune, or to take arms against a sea of troubles and by opposing end them.",
        style_target: "Style: Reword, Target: A Pirate",
    },
    PromptCase {
        user_message: "The Industrial Revolution, which took place from the 18th to 19th centuries, was a period during which predominantly agrarian, rural societies in Europe and America became industrial and urban. Prior to the Industrial Revolution, which began in Britain in the late 1700s, manufacturing was often done in people's homes, using hand tools or basic machines. Industrialization marked a shift to powered, special-purpose machinery, factories, and mass production. The iron and textile industries, along with the development of the steam engine, played central roles in the Industrial Revolution, which also saw improved systems of transportation, communication, and banking. While industrialization brought about an increased volume and variety of manufactured goods and an improved standard of living for some, it also resulted in often grim employment and living conditions for the poor and working classes.",
        style_target: "Style: Simplify, Target: 5th Grader",
    },
    PromptCase {
        user_message: "The Battle of Gettysburg, fought from July 1-3, 1863, was a turning point in the American Civil War. Union forces, led by General George Meade, defeated Confederate forces under General Robert E. Lee. The battle resulted in 51,000 casualties, with 23,000 Union and 28,000 Confederate soldiers killed, wounded, or missing.",
        style_target: "Style: Reword, Target: A mob boss",
    },
    PromptCase {
        user_message: "Glaucoma is a group of eye disorders that can damage the optic nerve, leading to vision loss and blindness. The most common form of glaucoma is primary open-angle glaucoma (POAG), which is characterized by increased intraocular pressure (IOP) due to an imbalance in the production and drainage of aqueous humor.",
        style_target: "Style: Simplify, Target: A general audience",
    },
    PromptCase {
        user_message: "El cambio climático es uno de los mayores desafíos que enfrenta la humanidad en la actualidad. Los científicos advierten que si no se toman medidas urgentes para reducir las emisiones de gases de efecto invernadero, las consecuencias podrían ser catastróficas.",
        style_target: "Style: Translate, Target: Russian",
    },
    PromptCase {
        user_message: "This restraunt had the worst service ever! The waiter was rude and got our orders wrong twice. The food was cold and bland, def not worth the high prices. I won't be coming back here again, and I don't recommend it to anyone else either!",
        style_target: "Style: Proofread and edit, Target: Standard English",
    },
];

/// Short label for a prompt, used in log lines
pub fn prompt_label(case: &PromptCase) -> String {
    const MAX_CHARS: usize = 48;
    let mut label: String = case.user_message.chars().take(MAX_CHARS).collect();
    if case.user_message.chars().count() > MAX_CHARS {
        label.push_str("...");
    }
    label
}
