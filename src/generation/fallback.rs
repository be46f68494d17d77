//! Offline course and quiz templates used whenever generation fails.
//!
//! Every string is a template in which `{topic}` is substituted. Correct
//! answers are stored as an index into the option list.

use crate::models::domain::{
    CaseStudy, CourseContent, Difficulty, HandsOnExercise, Lesson, Module, ModuleLevel,
    PracticalExample, Project, Projects, Question, QuestionSet, QuizContent, Resources,
};

const TOPIC: &str = "{topic}";

struct QuestionTemplate {
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

struct ExampleTemplate {
    title: &'static str,
    description: &'static str,
    common_mistakes: &'static str,
    correction: &'static str,
}

struct ExerciseTemplate {
    exercise: &'static str,
    difficulty: Difficulty,
    solution: &'static str,
}

struct CaseStudyTemplate {
    title: &'static str,
    scenario: &'static str,
    steps: &'static [&'static str],
    outcome: &'static str,
}

struct LessonTemplate {
    title: &'static str,
    beginner_explanation: &'static str,
    deep_theory: &'static str,
    examples: &'static [ExampleTemplate],
    exercises: &'static [ExerciseTemplate],
    case_study: CaseStudyTemplate,
    quiz: &'static [QuestionTemplate],
    hours: f64,
}

struct ModuleTemplate {
    title: &'static str,
    level: ModuleLevel,
    overview: &'static str,
    hours: f64,
    lessons: &'static [LessonTemplate],
}

struct ProjectTemplate {
    title: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
    sample_solution: &'static str,
    improvement_ideas: &'static [&'static str],
}

const COURSE_TITLE: &str = "Introduction to {topic}";
const COURSE_DESCRIPTION: &str = "Learn the fundamentals of {topic}. This is a basic template course; \
try again when the generation service is available for full content with detailed modules, examples and exercises.";
const ESTIMATED_DURATION: &str = "2-3 weeks";

const LEARNING_OUTCOMES: &[&str] = &[
    "Understand the core concepts of {topic}",
    "Learn practical applications and use cases",
    "Build foundational knowledge for advanced topics",
    "Practice with hands-on examples",
];

const MODULES: &[ModuleTemplate] = &[
    ModuleTemplate {
        title: "Getting Started with {topic}",
        level: ModuleLevel::Beginner,
        overview: "This module introduces the fundamental concepts of {topic}: what it is, why it matters and how to get started.",
        hours: 3.0,
        lessons: &[LessonTemplate {
            title: "What is {topic}?",
            beginner_explanation: "{topic} is best learned like any new skill: start with the basics and build up from there.\n\n\
Think of learning to cook. Before making complex dishes you need to know what each ingredient does and how \
the basic techniques work together. Studying {topic} works the same way.\n\n\
In simple terms, {topic} gives you a structured approach to specific real-world problems.",
            deep_theory: "## Understanding {topic} in Depth\n\n\
### Key Concepts\n\
- **Foundation**: the basic building blocks of {topic}\n\
- **Structure**: how the components are organized\n\
- **Function**: what {topic} accomplishes\n\
- **Application**: where {topic} is used in practice\n\n\
### Real-World Impact\n\
People use {topic} to:\n\
1. Streamline processes\n\
2. Reduce complexity\n\
3. Improve outcomes\n\
4. Scale operations",
            examples: &[
                ExampleTemplate {
                    title: "Basic Example",
                    description: "To apply {topic} to a simple project, identify the problem, understand the requirements and implement a solution step by step.",
                    common_mistakes: "Rushing through {topic} without understanding the fundamentals leads to confusion later.",
                    correction: "Understand each concept before moving on to the next. Practice with simple examples first.",
                },
                ExampleTemplate {
                    title: "Practical Application",
                    description: "{topic} can be applied to everyday tasks such as organizing information or solving problems systematically.",
                    common_mistakes: "Using advanced techniques before the basics are mastered.",
                    correction: "Follow a learning path from basics to intermediate to advanced material.",
                },
            ],
            exercises: &[
                ExerciseTemplate {
                    exercise: "Research and list 3 real-world applications of {topic} in your field of interest.",
                    difficulty: Difficulty::Easy,
                    solution: "Look for case studies and articles. Note how {topic} is used and which problems it solves.",
                },
                ExerciseTemplate {
                    exercise: "Identify a simple problem that could be solved using {topic} and outline the steps you would take.",
                    difficulty: Difficulty::Medium,
                    solution: "Break the problem into smaller parts and map each part to a concept of {topic}.",
                },
            ],
            case_study: CaseStudyTemplate {
                title: "Real-World Use of {topic}",
                scenario: "A team needs to apply {topic} to a business challenge in order to improve efficiency and reduce errors.",
                steps: &[
                    "Analyze the current situation and identify pain points",
                    "Research how {topic} can address these issues",
                    "Plan the implementation strategy",
                    "Execute in phases with testing",
                    "Measure results and optimize",
                ],
                outcome: "By applying {topic} correctly the team improves its workflow and productivity.",
            },
            quiz: &[
                QuestionTemplate {
                    question: "What is the main purpose of {topic}?",
                    options: [
                        "To make complex problems manageable",
                        "To replace human thinking",
                        "To create more work",
                        "None of the above",
                    ],
                    correct: 0,
                    explanation: "{topic} helps break down and solve complex challenges in a structured way.",
                },
                QuestionTemplate {
                    question: "Which is the best approach when learning {topic}?",
                    options: [
                        "Jump straight to advanced topics",
                        "Start with fundamentals and build up",
                        "Skip theory and only do practice",
                        "Memorize without understanding",
                    ],
                    correct: 1,
                    explanation: "A strong foundation is needed to master any subject.",
                },
            ],
            hours: 3.0,
        }],
    },
    ModuleTemplate {
        title: "Practical Applications of {topic}",
        level: ModuleLevel::Intermediate,
        overview: "Learn how to apply {topic} in real-world scenarios with hands-on examples and projects.",
        hours: 4.0,
        lessons: &[LessonTemplate {
            title: "Applying {topic} in Practice",
            beginner_explanation: "Now that you know what {topic} is, it is time to use it. This is the step from reading a recipe to actually cooking.\n\n\
Start small, practice regularly and take on harder challenges gradually.",
            deep_theory: "## Practical Implementation of {topic}\n\n\
### Step-by-Step Approach\n\
1. **Identify the use case**: know what you are trying to achieve\n\
2. **Gather resources**: collect the tools and information you need\n\
3. **Plan your approach**: create a roadmap\n\
4. **Execute systematically**: follow the plan and document progress\n\
5. **Test and refine**: verify the result and improve it",
            examples: &[ExampleTemplate {
                title: "Building a Project",
                description: "When building a project with {topic}, split it into phases and finish each phase before starting the next.",
                common_mistakes: "Doing everything at once leads to overwhelm and errors.",
                correction: "Work iteratively: build, test, improve, repeat.",
            }],
            exercises: &[
                ExerciseTemplate {
                    exercise: "Create a simple project plan for applying {topic} to a problem in your domain.",
                    difficulty: Difficulty::Medium,
                    solution: "Outline the problem statement, how {topic} helps, the implementation steps and the success criteria.",
                },
                ExerciseTemplate {
                    exercise: "Find a case study of {topic} being used successfully and analyze what made it work.",
                    difficulty: Difficulty::Medium,
                    solution: "Look for clear goals, proper planning, skilled execution and continuous improvement.",
                },
            ],
            case_study: CaseStudyTemplate {
                title: "Successful Implementation",
                scenario: "A professional applies {topic} to streamline their workflow and achieves measurable improvements.",
                steps: &[
                    "Identified inefficiencies in the current process",
                    "Mapped how {topic} could help",
                    "Implemented changes incrementally",
                    "Monitored results and adjusted",
                    "Scaled the practices that worked",
                ],
                outcome: "Productivity increased by applying {topic} principles systematically.",
            },
            quiz: &[QuestionTemplate {
                question: "What is the most important factor when applying {topic}?",
                options: [
                    "Having expensive tools",
                    "Clear understanding of objectives",
                    "Working alone",
                    "Rushing through implementation",
                ],
                correct: 1,
                explanation: "Knowing what you want to achieve guides every decision along the way.",
            }],
            hours: 4.0,
        }],
    },
];

const MINI_PROJECT: ProjectTemplate = ProjectTemplate {
    title: "{topic} Mini Challenge",
    description: "Apply what you have learned to solve a practical problem using {topic}.",
    requirements: &[
        "Identify a real problem or use case",
        "Apply {topic} concepts to address it",
        "Document your approach and solution",
        "Reflect on what you learned",
    ],
    sample_solution: "Choose a problem relevant to your interests, research how {topic} is used in that context, then plan, implement and test a solution.",
    improvement_ideas: &[
        "Add more complexity gradually",
        "Ask others for feedback",
        "Write down lessons learned",
    ],
};

const FINAL_PROJECT: ProjectTemplate = ProjectTemplate {
    title: "{topic} Capstone Project",
    description: "Complete a comprehensive project that demonstrates your understanding of {topic}.",
    requirements: &[
        "Deep application of {topic} principles",
        "Well-documented process",
        "Clear results and outcomes",
        "Presentation of learnings",
    ],
    sample_solution: "Design a complete solution that leverages {topic}, including planning, implementation, testing and documentation.",
    improvement_ideas: &[
        "Get peer review",
        "Present to a broader audience",
        "Publish your findings",
    ],
};

const REVISION_NOTES: &str = "## {topic} - Key Takeaways\n\n\
### Core Concepts\n\
- {topic} provides structured approaches to solving problems\n\
- Fundamentals come before advanced material\n\
- Practice and application reinforce learning\n\n\
### Next Steps\n\
- Keep practicing with varied examples\n\
- Explore advanced topics\n\
- Share your knowledge with others";

const FINAL_ASSESSMENT: &[QuestionTemplate] = &[
    QuestionTemplate {
        question: "What is the most effective way to learn {topic}?",
        options: [
            "Rushing through all material quickly",
            "Understanding basics, then practicing regularly",
            "Only reading without practice",
            "Skipping fundamentals",
        ],
        correct: 1,
        explanation: "Combining understanding with consistent practice is the most effective approach.",
    },
    QuestionTemplate {
        question: "When applying {topic}, you should:",
        options: [
            "Start with the most complex problems",
            "Begin with simple applications and build up",
            "Work without a plan",
            "Avoid documenting your process",
        ],
        correct: 1,
        explanation: "Starting simple and advancing gradually builds solid expertise.",
    },
    QuestionTemplate {
        question: "Why is {topic} valuable?",
        options: [
            "It makes work more complicated",
            "It provides structured solutions to challenges",
            "It replaces the need for thinking",
            "It is only for experts",
        ],
        correct: 1,
        explanation: "{topic} offers systematic approaches to real-world problems.",
    },
];

const QUIZ_TITLE: &str = "{topic} Quiz";

const QUIZ: &[QuestionTemplate] = &[
    QuestionTemplate {
        question: "What is {topic}?",
        options: ["A tool", "A concept", "A language", "None of these"],
        correct: 1,
        explanation: "{topic} is first of all a body of concepts.",
    },
    QuestionTemplate {
        question: "What should you study first when learning {topic}?",
        options: [
            "Its fundamentals",
            "Its most advanced techniques",
            "Its history only",
            "Nothing, practice is enough",
        ],
        correct: 0,
        explanation: "Later material builds on the fundamentals.",
    },
    QuestionTemplate {
        question: "Which habit helps most when practicing {topic}?",
        options: [
            "Practicing once and stopping",
            "Regular practice with increasing difficulty",
            "Avoiding feedback",
            "Copying solutions without reading them",
        ],
        correct: 1,
        explanation: "Steady practice with growing difficulty turns knowledge into skill.",
    },
    QuestionTemplate {
        question: "How should a large problem involving {topic} be approached?",
        options: [
            "All at once",
            "By guessing",
            "By breaking it into smaller parts",
            "By postponing it",
        ],
        correct: 2,
        explanation: "Smaller parts can be understood and solved one at a time.",
    },
    QuestionTemplate {
        question: "Why are real-world case studies useful when learning {topic}?",
        options: [
            "They replace the theory",
            "They show how concepts are applied in practice",
            "They are shorter than textbooks",
            "They are not useful",
        ],
        correct: 1,
        explanation: "Case studies connect concepts to concrete situations.",
    },
];

fn fill(template: &str, topic: &str) -> String {
    template.replace(TOPIC, topic)
}

fn fill_all(templates: &[&str], topic: &str) -> Vec<String> {
    templates.iter().map(|t| fill(t, topic)).collect()
}

fn question(template: &QuestionTemplate, topic: &str) -> Question {
    let options = fill_all(&template.options, topic);
    let correct_answer = options[template.correct].clone();
    Question::new(
        fill(template.question, topic),
        options,
        correct_answer,
        fill(template.explanation, topic),
    )
}

fn questions(templates: &[QuestionTemplate], topic: &str) -> Vec<Question> {
    templates.iter().map(|t| question(t, topic)).collect()
}

fn lesson(template: &LessonTemplate, topic: &str) -> Lesson {
    Lesson {
        lesson_title: fill(template.title, topic),
        beginner_explanation: fill(template.beginner_explanation, topic),
        deep_theory: fill(template.deep_theory, topic),
        practical_examples: template
            .examples
            .iter()
            .map(|e| PracticalExample {
                title: fill(e.title, topic),
                description: fill(e.description, topic),
                common_mistakes: fill(e.common_mistakes, topic),
                correction: fill(e.correction, topic),
            })
            .collect(),
        hands_on_exercises: template
            .exercises
            .iter()
            .map(|e| HandsOnExercise {
                exercise: fill(e.exercise, topic),
                difficulty: e.difficulty,
                solution: fill(e.solution, topic),
            })
            .collect(),
        case_study: CaseStudy {
            title: fill(template.case_study.title, topic),
            scenario: fill(template.case_study.scenario, topic),
            steps: fill_all(template.case_study.steps, topic),
            outcome: fill(template.case_study.outcome, topic),
        },
        chapter_quiz: QuestionSet::new(questions(template.quiz, topic)),
        estimated_hours: template.hours,
    }
}

fn project(template: &ProjectTemplate, topic: &str) -> Project {
    Project {
        title: fill(template.title, topic),
        description: fill(template.description, topic),
        requirements: fill_all(template.requirements, topic),
        sample_solution: fill(template.sample_solution, topic),
        improvement_ideas: fill_all(template.improvement_ideas, topic),
    }
}

/// Two-module template course with projects, revision notes and a short
/// final assessment. Resources are left empty.
pub fn default_course(topic: &str) -> CourseContent {
    let modules: Vec<Module> = MODULES
        .iter()
        .map(|m| Module {
            module_title: fill(m.title, topic),
            level: m.level,
            module_overview: fill(m.overview, topic),
            estimated_hours: m.hours,
            lessons: m.lessons.iter().map(|l| lesson(l, topic)).collect(),
        })
        .collect();
    let estimated_learning_hours: f64 = modules.iter().map(|m| m.estimated_hours).sum();

    CourseContent {
        title: fill(COURSE_TITLE, topic),
        description: fill(COURSE_DESCRIPTION, topic),
        learning_outcomes: fill_all(LEARNING_OUTCOMES, topic),
        estimated_duration: ESTIMATED_DURATION.to_string(),
        estimated_learning_hours,
        modules,
        projects: Projects {
            mini_project: project(&MINI_PROJECT, topic),
            final_project: project(&FINAL_PROJECT, topic),
        },
        revision_notes: fill(REVISION_NOTES, topic),
        final_assessment: QuestionSet::new(questions(FINAL_ASSESSMENT, topic)),
        resources: Resources::default(),
    }
}

pub fn default_quiz(topic: &str) -> QuizContent {
    QuizContent::new(fill(QUIZ_TITLE, topic), questions(QUIZ, topic))
}
