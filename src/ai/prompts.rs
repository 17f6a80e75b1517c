//! Role and task definitions and prompt assembly.
//!
//! Roles and tasks are plain immutable records rendered into prompt text.
//! The coordinator passes them explicitly to the stage invocations; there
//! is no dynamic agent object behind them.

use std::path::Path;

/// A role the AI model is asked to assume for one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    /// Short role title.
    pub role: &'static str,
    /// What the role is trying to achieve.
    pub goal: &'static str,
    /// Framing that shapes the role's voice and priorities.
    pub backstory: &'static str,
}

/// A unit of work given to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    /// What to do.
    pub description: &'static str,
    /// The shape the answer must take.
    pub expected_output: &'static str,
}

/// The code-analyst role for the analysis stage.
pub const ANALYST: RoleProfile = RoleProfile {
    role: "Senior Code Analyst",
    goal: "Analyze the provided codebase to understand its purpose, features, and tech stack.",
    backstory: "You are an expert software developer with a knack for quickly understanding \
                code. You focus on the important files and ignore noise, allowing you to \
                concentrate on what truly matters.",
};

/// The business-strategist role for the strategy stage.
pub const STRATEGIST: RoleProfile = RoleProfile {
    role: "Business Development Strategist",
    goal: "Identify and develop compelling business use cases for a given technology project.",
    backstory: "You have a sharp eye for market opportunities and excel at turning technical \
                innovations into profitable business ventures.",
};

/// The analysis task given to the analyst.
pub const ANALYSIS_TASK: TaskSpec = TaskSpec {
    description: "Analyze the project below. You are given the list of relevant files found \
                  in the project directory and the full content of the most critical ones \
                  (README, entry points, dependency manifests). Synthesize this information \
                  into a concise technical summary.",
    expected_output: "A detailed technical summary including:\n\
                      1. The project's primary purpose and functionality.\n\
                      2. Key features and capabilities discovered from the source code.\n\
                      3. The technology stack (languages, frameworks, libraries).\n\
                      4. A high-level overview of the code structure.",
};

/// The use-case brainstorming task given to the strategist.
pub const STRATEGY_TASK: TaskSpec = TaskSpec {
    description: "Based on the technical summary of the project, brainstorm potential \
                  business use cases.",
    expected_output: "A well-structured report with at least three potential business use \
                      cases. Each use case should include:\n\
                      1. **Use Case Title**: A catchy name for the business idea.\n\
                      2. **Target Audience**: Specific group of users or businesses.\n\
                      3. **Value Proposition**: The unique value or problem solved for the \
                      audience.\n\
                      4. **Potential Monetization Strategy**: How to generate revenue.",
};

/// Renders the system prompt for a role.
pub fn system_prompt(role: &RoleProfile) -> String {
    format!(
        "You are a {role}. {backstory}\n\nYour goal: {goal}",
        role = role.role,
        backstory = role.backstory,
        goal = role.goal,
    )
}

/// Renders the analysis-stage user prompt.
///
/// Includes the project path, the filtered file listing, and the content
/// of each critical file in a fenced block labeled with its path.
pub fn analysis_user_prompt(
    task: &TaskSpec,
    project_path: &Path,
    file_list: &[std::path::PathBuf],
    contents: &[(std::path::PathBuf, String)],
) -> String {
    let mut prompt = format!(
        "{description}\n\nProject directory: {path}\n\nRelevant files:\n",
        description = task.description,
        path = project_path.display(),
    );

    if file_list.is_empty() {
        prompt.push_str("(no relevant files found in the directory after filtering)\n");
    }
    for file in file_list {
        prompt.push_str("- ");
        prompt.push_str(&file.display().to_string());
        prompt.push('\n');
    }

    for (path, text) in contents {
        prompt.push_str(&format!(
            "\n--- {path} ---\n{text}\n",
            path = path.display(),
        ));
    }

    prompt.push_str(&format!(
        "\nExpected output:\n{expected}",
        expected = task.expected_output
    ));
    prompt
}

/// Renders the strategy-stage user prompt with the technical summary as
/// context.
pub fn strategy_user_prompt(task: &TaskSpec, technical_summary: &str) -> String {
    format!(
        "{description}\n\nTechnical summary of the project:\n\n{summary}\n\n\
         Expected output:\n{expected}",
        description = task.description,
        summary = technical_summary,
        expected = task.expected_output,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn system_prompt_carries_all_role_fields() {
        let prompt = system_prompt(&ANALYST);
        assert!(prompt.contains(ANALYST.role));
        assert!(prompt.contains(ANALYST.goal));
        assert!(prompt.contains("expert software developer"));
    }

    #[test]
    fn analysis_prompt_lists_files_and_contents() {
        let files = vec![PathBuf::from("README.md"), PathBuf::from("main.py")];
        let contents = vec![(PathBuf::from("README.md"), "# Demo".to_string())];

        let prompt = analysis_user_prompt(&ANALYSIS_TASK, Path::new("/proj"), &files, &contents);
        assert!(prompt.contains("/proj"));
        assert!(prompt.contains("- README.md"));
        assert!(prompt.contains("- main.py"));
        assert!(prompt.contains("--- README.md ---"));
        assert!(prompt.contains("# Demo"));
        assert!(prompt.contains("technical summary"));
    }

    #[test]
    fn analysis_prompt_notes_empty_file_list() {
        let prompt = analysis_user_prompt(&ANALYSIS_TASK, Path::new("/proj"), &[], &[]);
        assert!(prompt.contains("no relevant files found"));
    }

    #[test]
    fn strategy_prompt_embeds_summary_and_format() {
        let prompt = strategy_user_prompt(&STRATEGY_TASK, "the project does X");
        assert!(prompt.contains("the project does X"));
        assert!(prompt.contains("at least three potential business use"));
        assert!(prompt.contains("Use Case Title"));
        assert!(prompt.contains("Monetization"));
    }
}
