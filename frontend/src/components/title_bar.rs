use yew::{function_component, html, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct TitleBarProps {
    pub title: String,
}

/// Fixed 60px bar across the top of the page.
#[function_component(TitleBar)]
pub fn title_bar(props: &TitleBarProps) -> Html {
    html! {
        <div style="position: fixed; top: 0; left: 0; right: 0; height: 60px; z-index: 999;">
            <h1 style="
                    margin: 0;
                    padding: 15px 30px;
                    font-weight: 600;
                    font-size: 24px;
                    font-family: 'Inter', sans-serif;
                    text-align: center;
                    background-color: #ffffff;
                    box-shadow: 0 2px 5px rgba(0,0,0,0.1);
                    user-select: none;
                ">
                { props.title.clone() }
            </h1>
        </div>
    }
}
