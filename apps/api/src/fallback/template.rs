//! Generic fallback template: fixed slide, flashcard and markdown skeletons
//! with the caller's industry/topic and a themed vocabulary filled in.
//!
//! Output depends only on the two input strings. No clock, no randomness.

use crate::fallback::themes::{industry_context, topic_theme};
use crate::models::{Flashcard, GeneratedKit, Slide, TrainingModule, TrainingPlan};

fn slide(title: String, content: [String; 4], speaker_notes: String, visual: String) -> Slide {
    Slide {
        title,
        content: content.into(),
        speaker_notes,
        visual_search_term: visual,
    }
}

fn card(front: String, back: String) -> Flashcard {
    Flashcard { front, back }
}

/// Lowercase, whitespace runs collapsed to `-`.
fn slug(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn template_kit(industry: &str, topic: &str) -> GeneratedKit {
    let theme = topic_theme(topic);
    let ctx = industry_context(industry);

    let [theme0, theme1, theme2, _] = theme.themes;
    let [visual0, visual1, visual2, visual3] = theme.visual_keywords;
    let activity0 = theme.activities[0];
    let [example0, example1, example2, _] = ctx.examples;
    let [challenge0, challenge1, challenge2, _] = ctx.challenges;

    let slides = vec![
        slide(
            format!("{topic} in {industry}: Welcome & Overview"),
            [
                format!("Tailored training for {industry} professionals"),
                format!("Industry-specific challenges: {challenge0} and {challenge1}"),
                "Real-world applications in your daily work".to_string(),
                "Expected outcomes and measurable goals".to_string(),
            ],
            format!(
                "Start with a brief poll: \"How many of you have experienced {challenge0} in the past month?\" \
                 Use this to gauge experience level and adjust delivery accordingly."
            ),
            format!("{industry} {visual0} professional setting"),
        ),
        slide(
            format!("Understanding {theme0}"),
            [
                "Core principles and framework".to_string(),
                format!("Industry example: {example0}"),
                "Common misconceptions debunked".to_string(),
                "The ROI of proper implementation".to_string(),
            ],
            "Use the whiteboard to map out the framework. Ask participants to share their current \
             approaches; this creates engagement and reveals knowledge gaps."
                .to_string(),
            format!("{visual1} concept diagram blueprint"),
        ),
        slide(
            format!("Practical Application: {theme1}"),
            [
                "Step-by-step methodology".to_string(),
                format!("{industry} case study walkthrough"),
                "Tools and resources available".to_string(),
                "Checkpoint: Quick knowledge check".to_string(),
            ],
            "Split into groups of 3-4. Assign each group a mini scenario from the handout. Give them \
             10 minutes to develop a solution using the methodology just presented."
                .to_string(),
            format!("{industry} team working {visual2}"),
        ),
        slide(
            format!("Advanced Topics: {theme2}"),
            [
                "Scaling beyond the basics".to_string(),
                "Handling exception scenarios".to_string(),
                format!("Integration with existing {example1}"),
                "Measuring success metrics".to_string(),
            ],
            "This is where experienced participants shine. Encourage them to share real challenges \
             they've faced and overcome."
                .to_string(),
            format!("{visual3} advanced technology innovation"),
        ),
        slide(
            format!("Interactive Activity: {activity0}"),
            [
                "Hands-on practice session".to_string(),
                format!("Work on realistic {industry} scenario"),
                "Peer feedback and discussion".to_string(),
                "Identify gaps and next steps".to_string(),
            ],
            "Monitor the room closely during this activity. Look for struggling participants and \
             offer guidance. This is the most valuable part of the training."
                .to_string(),
            format!("diverse team {activity0} workshop collaboration"),
        ),
        slide(
            "Action Planning & Next Steps".to_string(),
            [
                "Key takeaways summary".to_string(),
                "30-60-90 day implementation plan".to_string(),
                "Resources: Internal wiki, mentorship program".to_string(),
                "Q&A and closing thoughts".to_string(),
            ],
            "End with the \"one thing\" exercise: everyone commits to one specific action they'll \
             take this week. Have them write it down and share with a partner for accountability."
                .to_string(),
            "success achievement goal planning roadmap".to_string(),
        ),
    ];

    let flashcards = vec![
        card(
            format!("What is the primary benefit of {topic} in {industry}?"),
            format!(
                "Improved {challenge2}, leading to better {example2} and overall organizational efficiency."
            ),
        ),
        card(
            format!("Name two key {theme0} principles"),
            "1) Continuous improvement through feedback loops\n2) Data-driven decision making based on measurable outcomes"
                .to_string(),
        ),
        card(
            format!("Common mistake when implementing {topic}"),
            "Skipping the planning phase and jumping straight to execution without stakeholder buy-in or proper resource allocation."
                .to_string(),
        ),
        card(
            format!("How to measure success in {industry}?"),
            format!(
                "Track KPIs like: reduction in {challenge0}, improved {example0} efficiency, and employee satisfaction scores."
            ),
        ),
        card(
            format!("Best practice for {theme1}"),
            "Start with a pilot program in one department, gather feedback, iterate, then scale organization-wide with documented lessons learned."
                .to_string(),
        ),
    ];

    GeneratedKit {
        slides,
        flashcards,
        handout_markdown: handout_markdown(industry, topic),
        facilitator_guide_markdown: facilitator_guide_markdown(industry, topic),
        background_image_prompt: format!(
            "{industry} {topic} {visual0} professional corporate modern"
        ),
    }
}

/// Six modules following the facilitator guide timeline (90 minutes total).
pub fn template_plan(industry: &str, topic: &str) -> TrainingPlan {
    let theme = topic_theme(topic);
    let ctx = industry_context(industry);

    let [theme0, theme1, theme2, _] = theme.themes;
    let [activity0, activity1, _, _] = theme.activities;
    let example0 = ctx.examples[0];
    let challenge0 = ctx.challenges[0];

    let module = |title: String, description: String, duration_minutes: u32| TrainingModule {
        title,
        description,
        duration_minutes,
    };

    TrainingPlan {
        title: format!("{topic} for {industry} Teams"),
        target_audience: format!("Mid to senior-level {industry} professionals"),
        learning_objectives: vec![
            format!("Explain the core principles of {topic} as applied to {industry}"),
            format!("Apply {theme0} techniques to {example0} scenarios"),
            format!("Identify at least 3 opportunities to reduce {challenge0} in daily work"),
            format!("Create a personal 30-60-90 day action plan for {topic}"),
        ],
        modules: vec![
            module(
                "Opening & Icebreaker".to_string(),
                format!("Build rapport and assess baseline experience with {challenge0}."),
                10,
            ),
            module(
                format!("Foundations: {theme0}"),
                format!("Core principles and misconceptions, illustrated with {example0}."),
                15,
            ),
            module(
                format!("Practical Application: {theme1}"),
                format!("Small groups work a {industry} case study using the methodology."),
                20,
            ),
            module(
                format!("Hands-On Practice: {activity0}"),
                format!("Individual or paired practice with coaching, then a group debrief on {theme2}."),
                25,
            ),
            module(
                "Action Planning".to_string(),
                "Participants write and share a one-thing commitment and a 30-60-90 day plan."
                    .to_string(),
                15,
            ),
            module(
                "Closing & Q&A".to_string(),
                "Final questions, resources and evaluation survey.".to_string(),
                5,
            ),
        ],
        suggested_enhancements: vec![
            format!("Send a pre-session survey on {challenge0} to tailor examples"),
            format!("Add a {activity1} exercise for experienced participants"),
            format!("Schedule a 30-day follow-up check-in on {theme2}"),
        ],
    }
}

fn facilitator_guide_markdown(industry: &str, topic: &str) -> String {
    let theme = topic_theme(topic);
    let ctx = industry_context(industry);
    let activity0 = theme.activities[0];
    let example0 = ctx.examples[0];
    let challenge0 = ctx.challenges[0];

    format!(
        r#"# Facilitator Guide: {topic} for {industry}

## Course Overview
**Industry:** {industry}
**Topic:** {topic}
**Duration:** 90 Minutes
**Audience:** Mid to senior-level professionals
**Prerequisites:** Basic understanding of {example0}

## Learning Objectives
By the end of this session, participants will:
1. Understand the core principles of {topic} as applied to {industry}
2. Identify at least 3 opportunities to apply these concepts in their work
3. Create a personal action plan for implementation

## Pre-Session Setup (30 min before)
- [ ] Test all AV equipment
- [ ] Print handouts (1 per participant + 2 extras)
- [ ] Set up breakout groups (3-4 people each)
- [ ] Prepare {activity0} materials
- [ ] Queue up case study video (if using)

## Detailed Delivery Timeline

### 00-10 min: Opening & Icebreaker
**Goal:** Build rapport and assess baseline knowledge

- Welcome and introductions
- **Icebreaker:** "Share one {challenge0} challenge you've faced this month"
- Set ground rules (phones away, active participation)
- Preview agenda

**Facilitation Tip:** Use a parking lot (flip chart) for off-topic questions that arise.

### 10-25 min: Foundation & Theory (Slides 1-2)
**Goal:** Establish shared understanding of core concepts

- Present fundamental principles
- Use {industry}-specific examples
- **Interactive poll:** "Have you tried this before?" (show of hands)
- Address common misconceptions

**Watch for:** Participants who look confused. Check in during breaks.

### 25-45 min: Practical Application (Slides 3-4)
**Goal:** Bridge theory to practice

- Walk through case study from {industry}
- **Group Activity:** Small groups solve a mini-scenario (15 min)
- Groups share solutions (2 min each)
- Instructor synthesizes key patterns

**Pacing Note:** This tends to run long. Keep groups on time.

### 45-70 min: Hands-On Practice (Slide 5)
**Goal:** Experiential learning through {activity0}

- Explain the {activity0} exercise
- Participants work individually or in pairs
- Circulate the room, provide coaching
- Debrief as a group: "What surprised you?"

**Common Issues:**
- Some participants may finish early: have an advanced challenge ready
- Others may struggle: pair them with a faster learner

### 70-85 min: Action Planning (Slide 6)
**Goal:** Ensure transfer of learning

- Distribute action plan template
- Participants write their "one thing" commitment
- **Pair & Share:** Exchange plans with neighbor
- Set follow-up accountability (optional)

### 85-90 min: Closing
- Answer final questions
- Share additional resources
- Distribute evaluation survey
- Thank participants

## Dealing with Difficult Situations

**If a participant dominates discussion:**
"Thanks for that input. Let's hear from someone who hasn't shared yet."

**If energy drops after lunch:**
Do a 2-minute standing stretch or energizer activity.

**If you're running behind:**
Skip the video or shorten the final Q&A. Never rush the hands-on activity.

## Post-Session Follow-Up
- [ ] Send summary email within 24 hours
- [ ] Share slide deck and resources
- [ ] Schedule optional office hours for questions
- [ ] Collect and review evaluation feedback

## Resources for Facilitators
- **Internal:** {industry} Knowledge Base (link)
- **External:** Industry standards and guidelines
- **Support:** Training team chat channel

---
*Version 1.2 | Confidential*
"#
    )
}

fn handout_markdown(industry: &str, topic: &str) -> String {
    let theme = topic_theme(topic);
    let ctx = industry_context(industry);
    let [theme0, theme1, theme2, _] = theme.themes;
    let activity0 = theme.activities[0];
    let [example0, example1, example2, _] = ctx.examples;
    let [challenge0, challenge1, challenge2, _] = ctx.challenges;
    let channel = slug(topic);

    format!(
        r#"# {topic} in {industry}: Participant Workbook

## Session Overview
**Today's Focus:** Practical application of {topic} principles in {industry} environments.

## Learning Objectives
- Understand core {topic} concepts
- Apply best practices to real {industry} scenarios
- Create a personal implementation roadmap

---

## Part 1: Key Concepts

### The {topic} Framework
{topic} in {industry} is built on three pillars:

1. **{theme0}**
   - Focus on {example0}
   - Continuous improvement mindset
   - Data-driven decisions

2. **{theme1}**
   - Integration with {example1}
   - Stakeholder alignment
   - Risk mitigation strategies

3. **{theme2}**
   - Scalable processes
   - Change management
   - Sustainability planning

### Why This Matters in {industry}
- **Challenge:** {challenge0}
  **Solution:** Systematic approach to {theme0}

- **Challenge:** {challenge1}
  **Solution:** {theme1} methodology

- **Challenge:** {challenge2}
  **Solution:** Proactive {theme2}

---

## Part 2: Case Study Analysis

### Scenario: {industry} Company X
Company X faced significant {challenge0} issues. They implemented {topic} principles and saw:
- 40% reduction in {challenge1}
- Improved {example2} efficiency
- Higher employee satisfaction

**Your Task:** Analyze what made this successful.

**Discussion Questions:**
1. What were the key success factors?
2. What obstacles did they likely face?
3. How could this apply to your organization?

**Notes:**
_____________________________________________________________________
_____________________________________________________________________

---

## Part 3: Hands-On Activity

### {activity0} Exercise
**Instructions:**
1. Review the scenario provided
2. Apply the {topic} framework
3. Document your approach
4. Share with your group

**Scenario:**
Your {industry} team is experiencing {challenge0}. You have been asked to propose a solution using {topic} principles.

**Your Solution:**
_____________________________________________________________________
_____________________________________________________________________

---

## Part 4: Personal Action Plan

### My 30-60-90 Day Plan

**Week 1-4 (Foundation):** One thing I will do, and how I will measure it:
_____________________________________________________________________

**Week 5-8 (Build):** One thing I will do, and how I will measure it:
_____________________________________________________________________

**Week 9-12 (Scale):** One thing I will do, and how I will measure it:
_____________________________________________________________________

### Accountability Partner
Name: _________________________ Email: _________________________

---

## Quick Reference Guide

### Do's
- Start small and iterate
- Gather feedback early
- Document lessons learned
- Celebrate quick wins

### Don'ts
- Skip stakeholder alignment
- Ignore existing processes
- Expect perfection immediately
- Work in silos

---

## Additional Resources

### Internal
- {industry} Wiki: [link]
- Best Practices Database
- Mentorship Program

### External
- Industry Association guidelines
- Online training modules
- Professional certification paths

### Support
- Questions? Email: training@company.com
- Office Hours: Every Friday 2-3 PM
- Chat Channel: #{channel}

---

**Keep This Workbook!**
Refer back to it as you implement {topic} in your daily work.

*{industry} Training Series | Confidential*
"#
    )
}
